//! Render a report query over a CTE and print the SQL with its arguments.
//!
//! Run with: `cargo run -p pgassembler --example cte_report`

use pgassembler::{AssemblerConfig, AssemblerResult, QueryAssembler};

const CONFIG: &str = r#"
cte_numbering = "continuous"
"#;

fn main() -> AssemblerResult<()> {
    let config = AssemblerConfig::from_toml_str(CONFIG)?;

    let mut recent = QueryAssembler::new("orders");
    recent
        .select(["id", "user_id", "total"])
        .and_where("created_at", ">", "2024-01-01")
        .or_where("status", "=", "paid")
        .or_where("status", "=", "shipped");

    let mut report = QueryAssembler::new("recent").with_config(config);
    report
        .select(["users.name", "recent.total"])
        .add_cte("recent", recent)
        .join("users", "id", "user_id")
        .and_where("recent.total", ">=", 100_i64);

    let (sql, args) = report.try_build_query()?;
    println!("{sql}");
    for (i, arg) in args.iter().enumerate() {
        println!("  ${} = {:?}", i + 1, arg);
    }
    Ok(())
}
