use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tabq::io::{parse_delimiter, read_table, ReaderOptions};
use tabq::output::render;
use tabq::select::{column_mapping, ColumnSelection, HiddenColumns};
use tabq::sort::{resolve_sort_column, sort_rows};
use tabq::{Error, FilterPipeline, OutputFormat, Result, Row, TableView, WhereFilter};

/// Query and format delimited text tables.
#[derive(Parser, Debug)]
#[command(name = "tabq", version, about = "Query and format delimited text tables")]
struct Cli {
    /// Input file
    file: PathBuf,

    /// The first row is data, not a header
    #[arg(long)]
    no_header: bool,

    /// Drop the first row entirely
    #[arg(short = 's', long)]
    skip_header: bool,

    /// Field delimiter (use '\t' for tab)
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// Comment character; lines starting with it are skipped
    #[arg(short, long, default_value = "#")]
    comment: char,

    /// Colorize table columns (table format only)
    #[arg(short = 'C', long)]
    color: bool,

    /// Comma-separated column indices to hide (e.g. 0,2,5)
    #[arg(short = 'H', long)]
    hide: Option<String>,

    /// Select and order columns (e.g. 'name,age' or '0,2,1')
    #[arg(short = 'S', long)]
    select: Option<String>,

    /// Show only rows containing this pattern
    #[arg(short, long)]
    filter: Option<String>,

    /// Filter rows with a condition (e.g. 'age > 25', 'name contains John'
    /// or 'age > 25 OR status = active')
    #[arg(short, long)]
    r#where: Option<String>,

    /// Sort by column name or index
    #[arg(short = 'B', long)]
    sort: Option<String>,

    /// Sort in descending order
    #[arg(short = 'D', long)]
    desc: bool,

    /// Output format: table (default), csv, tsv, json, markdown, html, xml
    #[arg(short, long, default_value = "table")]
    output: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let has_header = !cli.no_header && !cli.skip_header;

    let comment = if cli.comment.is_ascii() {
        cli.comment as u8
    } else {
        eprintln!("Warning: comment character must be ASCII, using '#'");
        b'#'
    };

    let options = ReaderOptions {
        delimiter: parse_delimiter(&cli.delimiter),
        comment: Some(comment),
        has_header,
        skip_first_row: cli.skip_header,
    };

    let mut table = read_table(&cli.file, &options)?;
    if table.is_empty() && table.header().is_none() {
        return Err(Error::EmptyData(format!(
            "no rows in input file {}",
            cli.file.display()
        )));
    }

    let format = cli.output.parse::<OutputFormat>().unwrap_or_else(|_| {
        eprintln!("Warning: unknown format '{}', using table", cli.output);
        OutputFormat::Table
    });

    if let Some(spec) = &cli.sort {
        match resolve_sort_column(spec, table.header()) {
            Some(index) => sort_rows(table.rows_mut(), index, cli.desc),
            None => {
                eprintln!("Warning: could not resolve sort column '{spec}', sorting skipped");
            }
        }
    }

    let mut pipeline = FilterPipeline::new();
    if let Some(pattern) = &cli.filter {
        pipeline = pipeline.with_pattern(pattern.clone());
    }
    if let Some(query) = &cli.r#where {
        match WhereFilter::parse(query) {
            Ok(filter) => pipeline = pipeline.with_where(filter),
            Err(err) => eprintln!("Warning: {err}; proceeding without where filter"),
        }
    }
    if let Some(header) = table.header() {
        pipeline.resolve(header);
    }

    let selection = cli
        .select
        .as_deref()
        .and_then(|spec| ColumnSelection::parse(spec, table.header()));
    let hidden = cli.hide.as_deref().map(HiddenColumns::parse).unwrap_or_default();
    let columns = column_mapping(table.column_count(), selection.as_ref(), &hidden);

    let total_rows = table.row_count();
    let rows: Vec<&Row> = table
        .rows()
        .iter()
        .filter(|row| pipeline.matches(row))
        .collect();

    let view = TableView {
        header: table.header(),
        rows,
        columns,
        total_rows,
        filtered: pipeline.is_active(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &view, format, cli.color)
}
