//! 烘焙生產需求計算完整範例
//!
//! 展示從訂單到攪拌計劃的完整計算流程

use bakeplan_calc::{PlanRequest, ProductionPlanner};
use bakeplan_core::{
    BaseDough, LaminationStyle, Order, OrderLine, OrderStatus, Product, Recipe, RecipeIngredient,
    Site,
};
use bakeplan_store::MemoryStore;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("===== Bakery Production Plan Example =====\n");

    let site_id = "SITE-01";
    let delivery_date = NaiveDate::from_ymd_opt(2024, 6, 10).ok_or("無效日期")?;

    // 步驟 1: 建立據點與目錄
    println!("[1] Create Site & Catalog");
    let mut store = MemoryStore::new();
    store.add_site(Site::new(site_id.to_string(), "中央廚房".to_string()));

    // 可頌麵糰：兩個開酥款式
    store.add_base_dough(
        site_id,
        BaseDough::new("DOUGH-CRO".to_string(), "可頌麵糰".to_string(), 2)
            .with_recipe("RCP-CRO".to_string())
            .with_style(
                LaminationStyle::new(
                    "STYLE-PLAIN".to_string(),
                    "原味可頌".to_string(),
                    "DOUGH-CRO".to_string(),
                    12,
                )
                .with_dough_per_sheet_g(Decimal::from(2400))
                .with_laminate_lead_days(1),
            )
            .with_style(
                LaminationStyle::new(
                    "STYLE-CHOC".to_string(),
                    "巧克力可頌".to_string(),
                    "DOUGH-CRO".to_string(),
                    10,
                )
                .with_dough_per_sheet_g(Decimal::from(2000))
                .with_laminate_lead_days(1),
            ),
    );
    println!("    DOUGH-CRO: 2 lamination styles, mix lead 2 days");

    // 法棍麵糰：直接成型
    store.add_base_dough(
        site_id,
        BaseDough::new("DOUGH-BAG".to_string(), "法棍麵糰".to_string(), 1)
            .with_units_per_batch(50)
            .with_batch_size_kg(Decimal::from(10)),
    );
    println!("    DOUGH-BAG: direct, 50 units/batch, 10kg/batch\n");

    // 步驟 2: 建立配方
    println!("[2] Create Recipe");
    store.add_recipe(Recipe::new(
        "RCP-CRO".to_string(),
        "可頌麵糰".to_string(),
        Decimal::from(12500),
        "g".to_string(),
    ));
    for (name, quantity, unit) in [
        ("高筋麵粉", 8000, "g"),
        ("奶油", 2500, "g"),
        ("水", 2, "l"),
    ] {
        store.add_ingredient(RecipeIngredient::new(
            "RCP-CRO".to_string(),
            name.to_string(),
            Decimal::from(quantity),
            unit.to_string(),
        ));
    }
    println!("    RCP-CRO: yields 12500 g\n");

    // 步驟 3: 建立產品
    println!("[3] Create Products");
    store.add_product(
        site_id,
        Product::new("P-PLAIN".to_string(), "原味可頌".to_string())
            .with_lamination_style("STYLE-PLAIN".to_string()),
    );
    store.add_product(
        site_id,
        Product::new("P-CHOC".to_string(), "巧克力可頌".to_string())
            .with_lamination_style("STYLE-CHOC".to_string()),
    );
    store.add_product(
        site_id,
        Product::new("P-BAG".to_string(), "法棍".to_string())
            .with_base_dough("DOUGH-BAG".to_string()),
    );
    println!("    P-PLAIN / P-CHOC (laminated), P-BAG (direct)\n");

    // 步驟 4: 建立訂單
    println!("[4] Create Orders");
    for (customer, lines) in [
        ("CUST-CAFE", vec![("P-PLAIN", 18), ("P-BAG", 40)]),
        ("CUST-HOTEL", vec![("P-PLAIN", 12), ("P-CHOC", 25), ("P-BAG", 80)]),
    ] {
        let order = Order::new(
            delivery_date,
            OrderStatus::Confirmed,
            customer.to_string(),
            site_id.to_string(),
        );
        let order_id = order.id;
        store.add_order(order);
        for (product_id, quantity) in &lines {
            store.add_order_line(OrderLine::new(
                order_id,
                product_id.to_string(),
                *quantity,
            ));
        }
        println!("    {customer}: {lines:?}");
    }
    println!();

    // 步驟 5: 執行計算
    println!("[5] Run Planner");
    let planner = ProductionPlanner::new(&store, &store, &store);
    let plan = planner.plan(&PlanRequest::new(site_id, delivery_date))?;

    println!("    Delivery: {}", plan.delivery_date);
    println!("    Mix day:  {}", plan.mix_day);
    println!(
        "    Orders:   {} confirmed\n",
        plan.order_summary.confirmed_orders
    );

    // 步驟 6: 輸出結果
    println!("[6] Dough Mixes");
    for mix in &plan.dough_mixes {
        println!(
            "    {}: {} kg, batches: {:?}",
            mix.dough_name, mix.total_kg, mix.total_batches
        );
        for style in &mix.lamination_styles {
            println!(
                "      style {}: {} products → {} sheets",
                style.style_name, style.total_products, style.sheets_needed
            );
        }
        for ingredient in &mix.ingredients {
            println!(
                "      ingredient {}: {} {}",
                ingredient.name, ingredient.quantity, ingredient.unit
            );
        }
    }

    if let Some(summary) = &plan.sheet_summary {
        println!("\n    Total sheets: {}", summary.total_sheets);
    }

    println!("\n===== JSON =====");
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
