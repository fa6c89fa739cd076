//! Full pipeline timings on a synthetic HR export.
//!
//! Run with: `cargo bench --bench optimizer`

use std::fmt::Write as _;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use synergy_select::data::{read_feature_table, FeatureTable};
use synergy_select::generate_team;

const TITLES: [&str; 7] = [
    "Manager",
    "Engineer",
    "Consultant",
    "Developer",
    "Analyst",
    "Technician",
    "Developer",
];

/// Deterministic export with `per_department` employees in each of four departments.
fn synthetic_csv(per_department: usize) -> String {
    let mut csv = String::from(
        "Employee_ID,Department,Gender,Age,Job_Title,Years_At_Company,Education_Level,Performance_Score,Monthly_Salary,Work_Hours_Per_Week,Projects_Handled,Overtime_Hours,Sick_Days,Training_Hours,Promotions,Resigned\n",
    );
    let mut id = 0_usize;
    for department in ["Engineering", "Sales", "Finance", "Operations"] {
        for n in 0..per_department {
            id += 1;
            let title = TITLES[n % TITLES.len()];
            let salary = match title {
                "Manager" => 9000 + (id * 37) % 2500,
                "Engineer" | "Consultant" => 6500 + (id * 53) % 2000,
                _ => 3500 + (id * 71) % 2500,
            };
            let gender = if id % 5 < 3 { "Male" } else { "Female" };
            let _ = writeln!(
                csv,
                "{id},{department},{gender},{},{title},{},Bachelor,{},{salary},{},{},{},{},{},{},False",
                22 + id % 35,
                id % 12,
                1 + id % 5,
                35 + id % 15,
                3 + id % 30,
                id % 28,
                id % 9,
                (id * 13) % 80,
                id % 4,
            );
        }
    }
    csv
}

fn table(per_department: usize) -> FeatureTable {
    read_feature_table(synthetic_csv(per_department).as_bytes()).expect("synthetic csv should parse")
}

fn bench_feature_table(c: &mut Criterion) {
    let csv = synthetic_csv(500);
    c.bench_function("feature_table/load_2000", |b| {
        b.iter(|| black_box(read_feature_table(black_box(csv.as_bytes()))))
    });
}

fn bench_generate_team(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_team");
    for per_department in [50_usize, 500, 2_000] {
        let table = table(per_department);
        // Tight enough that the budget loop has to swap.
        let budget = 12.0 * 5_200.0;
        group.bench_with_input(
            BenchmarkId::from_parameter(per_department),
            &table,
            |b, table| {
                b.iter(|| black_box(generate_team(table, "Engineering", 12, black_box(budget))))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_feature_table, bench_generate_team);
criterion_main!(benches);
