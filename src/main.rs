// src/main.rs

//! Demo driver for the rewrite engine.
//!
//! Reads a JSON-encoded expression tree (the serde representation of
//! [`Expr`]) from a file argument or stdin, simplifies it, and prints the
//! infix rendering — or the JSON of the result with `--json`. This is the
//! in-process boundary contract made tangible; it is not a parser.

use std::io::Read;

use anyhow::Context;
use log::{debug, info};

use expr_rewrite::{simplify, Expr};

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let mut json_output = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            _ => path = Some(arg),
        }
    }

    let input = match &path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read expression file '{}'", p))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read expression from stdin")?;
            buf
        }
    };

    let expr: Expr =
        serde_json::from_str(&input).context("Failed to decode expression JSON")?;
    debug!("input: {} ({} node(s))", expr, expr.node_count());

    let result = simplify(&expr);
    info!(
        "simplified {} node(s) down to {}",
        expr.node_count(),
        result.node_count()
    );

    if json_output {
        println!(
            "{}",
            serde_json::to_string(&result).context("Failed to encode result JSON")?
        );
    } else {
        println!("{}", result);
    }

    Ok(())
}
