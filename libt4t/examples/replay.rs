// Replay a reader session against the emulator.
//
// Reads one command APDU per line (hex, spaces allowed) from stdin and
// prints each response. A line `deactivate <code>` simulates the reader
// leaving the field. Run with `RUST_LOG=libt4t=debug` to see the trace.
//
//   printf '00A4040007D2760000850100\n00A4000C02E104\n00D6000002000A\n' \
//     | cargo run --example replay

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use libt4t::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let tag = Tag::new();
    let stdin = io::stdin();
    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(code) = line.strip_prefix("deactivate") {
            let reason: i32 = code
                .trim()
                .parse()
                .with_context(|| format!("line {}: bad reason code", n + 1))?;
            tag.on_deactivated(reason);
            println!("-- deactivated ({})", DeactivationReason::from(reason));
            continue;
        }

        let command = parse_hex(line)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("line {}: bad hex", n + 1))?;
        let response = tag.process_command(&command);
        println!("> {}", bytes_to_hex_spaced(&command));
        println!("< {}", bytes_to_hex_spaced(&response));
    }

    for text in tag.last_texts() {
        println!("received text: {}", text);
    }
    Ok(())
}
