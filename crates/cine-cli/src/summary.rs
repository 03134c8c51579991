use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cine_aggregate::{ExploreQuery, ExploreView};
use cine_core::Catalog;
use cine_model::{AggregateViews, PipelineReport, RankEntry, Record};

use cine_cli::types::CleanResult;

pub fn print_summary(catalog: &Catalog) {
    if let Some(origin) = catalog.origin() {
        println!("Source: {}", origin.display());
    }
    println!("Layout: {}", catalog.schema());
    print_report(catalog.report());

    let views = catalog.views();
    print_overview(views);
    print_ranking("Genres", &views.genre_ranking);
    print_titles("Top content", &views.top_content);
    match views.duration_rating.regression {
        Some(line) => println!(
            "Duration trend: rating = {:.4} x minutes + {:.3} ({} titles)",
            line.slope,
            line.intercept,
            views.duration_rating.sample.len()
        ),
        None => println!("Duration trend: not enough data"),
    }
    if let Some(cleaned) = &views.cleaned {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Content type"), header_cell("Titles")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for entry in &cleaned.content_types {
            table.add_row(vec![Cell::new(entry.content_type), Cell::new(entry.count)]);
        }
        println!("{table}");

        let mut table = Table::new();
        table.set_header(vec![header_cell("Decade"), header_cell("Titles")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for entry in &cleaned.decade_timeline {
            table.add_row(vec![Cell::new(format!("{}s", entry.decade)), Cell::new(entry.count)]);
        }
        println!("{table}");

        print_ranking("Directors", &cleaned.director_ranking);
        print_ranking("Actors", &cleaned.actor_ranking);
    }
}

fn print_report(report: &PipelineReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(report.raw_rows)]);
    table.add_row(vec![
        Cell::new("Missing rating"),
        count_cell(report.missing_rating, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates"),
        count_cell(report.duplicates_removed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Rejected"),
        count_cell(report.rejected, Color::Red),
    ]);
    for (reason, count) in report.rejections.iter() {
        table.add_row(vec![
            dim_cell(format!("  -> {reason}")),
            count_cell(count, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("Records")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.records).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_overview(views: &AggregateViews) {
    let overview = &views.overview;
    let quality = &views.data_quality;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Overview"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Titles"), Cell::new(overview.total_titles)]);
    table.add_row(vec![
        Cell::new("Mean rating"),
        optional_rating_cell(overview.mean_rating),
    ]);
    table.add_row(vec![
        Cell::new("Best rating"),
        optional_rating_cell(overview.max_rating),
    ]);
    table.add_row(vec![Cell::new("Genres"), Cell::new(overview.unique_genres)]);
    table.add_row(vec![
        Cell::new("Without duration"),
        count_cell(quality.missing_duration, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Without year"),
        count_cell(quality.missing_year, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Without genres"),
        count_cell(quality.missing_genres, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Without description"),
        count_cell(quality.missing_description, Color::Yellow),
    ]);
    println!("{table}");
}

pub fn print_ranking(label: &str, ranking: &[RankEntry]) {
    if ranking.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(label), header_cell("Titles")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (idx, entry) in ranking.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(&entry.name),
            Cell::new(entry.count),
        ]);
    }
    println!("{table}");
}

fn print_titles(label: &str, records: &[Record]) {
    if records.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(label),
        header_cell("Year"),
        header_cell("Rating"),
        header_cell("Votes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.title).add_attribute(Attribute::Bold),
            record.year.map_or_else(|| dim_cell("-"), Cell::new),
            rating_cell(record.rating),
            Cell::new(record.votes),
        ]);
    }
    println!("{table}");
}

pub fn print_explore(query: &ExploreQuery, view: &ExploreView) {
    println!(
        "Rating >= {} in genre {}: {} titles",
        query.min_rating, query.genre, view.matched
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rating"), header_cell("Titles")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for group in &view.rating_groups {
        table.add_row(vec![
            Cell::new(format!("{:.1}", group.rating)),
            Cell::new(group.count),
        ]);
    }
    println!("{table}");
    print_titles("Top ten", &view.top_ten);
}

pub fn print_clean(result: &CleanResult) {
    let summary = &result.summary;
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Cleaning"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in [
        ("Input rows", summary.input_rows),
        ("Output rows", summary.output_rows),
        ("With rating", summary.valid_rating),
        ("With votes", summary.valid_votes),
        ("With duration", summary.valid_duration),
        ("Movies", summary.movies),
        ("TV series", summary.tv_series),
        ("Miniseries", summary.miniseries),
        ("Unknown type", summary.unknown),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    println!("{table}");
    print_ranking("Primary genre", &result.primary_genres);
}

pub fn print_genres(genres: &[String]) {
    for genre in genres {
        println!("{genre}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn rating_cell(rating: f64) -> Cell {
    let color = if rating >= 8.0 {
        Color::Green
    } else if rating >= 6.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format!("{rating:.1}")).fg(color)
}

fn optional_rating_cell(rating: Option<f64>) -> Cell {
    rating.map_or_else(|| dim_cell("-"), |value| Cell::new(format!("{value:.2}")))
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
