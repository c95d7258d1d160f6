use std::io::{self, IsTerminal};

use clap::ValueEnum;
use dialoguer::{Input, theme::ColorfulTheme};
use mdpad_core::config::types::ResolvedConfig;
use mdpad_core::snippets::table::{TableFormat, TableSpec, scaffold};

use crate::TableArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormatArg {
    Aligned,
    Simple,
}

impl From<TableFormatArg> for TableFormat {
    fn from(arg: TableFormatArg) -> Self {
        match arg {
            TableFormatArg::Aligned => TableFormat::Aligned,
            TableFormatArg::Simple => TableFormat::Simple,
        }
    }
}

pub fn run(config: &ResolvedConfig, args: &TableArgs) {
    let format = args.format.map_or(config.table_format, TableFormat::from);

    let columns = dimension(args.columns, "Number of columns", 2);
    let rows = dimension(args.rows, "Number of rows", 2);

    let spec = TableSpec { columns, rows, format };
    match scaffold(&spec) {
        Ok(table) => print!("{table}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

/// Use the flag value, prompt on a terminal, or fail in batch mode.
fn dimension(flag: Option<usize>, prompt: &str, default: usize) -> usize {
    if let Some(value) = flag {
        return value;
    }

    if !io::stdin().is_terminal() {
        eprintln!("missing table dimensions; pass --columns and --rows in batch mode");
        std::process::exit(2);
    }

    let theme = ColorfulTheme::default();
    Input::<usize>::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .unwrap_or_else(|e| {
            eprintln!("input cancelled: {e}");
            std::process::exit(2);
        })
}
