//! Example: count arrangements of a single row, folded and unfolded.
//!
//! Run with:
//! `cargo run --example count_row -- "?###???????? 3,2,1"`

use spring_arrangements::{
    counters::memo::{MemoCounter, MemoTable},
    expand, parse_line, Count, CountOverflow,
};

fn main() {
    let line = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "?###???????? 3,2,1".to_string());

    let (record, runs) = match parse_line(&line) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("count_row: {err}");
            std::process::exit(2);
        }
    };

    println!("{record} {runs}");
    report("arrangements", MemoCounter.count_with_table(&record, &runs));

    let (record, runs) = expand(&record, &runs);
    report(
        "unfolded arrangements",
        MemoCounter.count_with_table(&record, &runs),
    );
}

fn report(label: &str, result: Result<(Count, MemoTable), CountOverflow>) {
    match result {
        Ok((count, memo)) => println!("{label}: {count} ({} states memoized)", memo.len()),
        Err(err) => println!("{label}: {err}"),
    }
}
