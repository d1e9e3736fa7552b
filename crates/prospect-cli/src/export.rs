// Export formatting: the copy-ready text list and CSV.

use std::io::Write;

use anyhow::{Context, Result};
use prospect_core::player::{inches_to_ft_in, PlayerRecord};
use serde::Serialize;

/// Output formats for `prospect export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Text,
    Csv,
}

/// One numbered line, e.g.
/// `1. Jalen Brooks — NFL WR • Outside WR • 6'2", 205 lb • Age 23 • #11 • Alabama`.
pub fn text_line(index: usize, p: &PlayerRecord) -> String {
    format!(
        "{}. {} — {} {} • {} • {}, {} lb • Age {} • #{} • {}",
        index,
        p.name,
        p.sport.label(),
        p.position.code(),
        p.archetype_label,
        inches_to_ft_in(p.height_inches),
        p.weight_pounds,
        p.age,
        p.jersey_number,
        p.origin_value
    )
}

/// Every player as a numbered line, newline-terminated.
pub fn to_text(players: &[PlayerRecord]) -> String {
    players
        .iter()
        .enumerate()
        .map(|(i, p)| text_line(i + 1, p) + "\n")
        .collect()
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    sport: &'a str,
    position: &'a str,
    archetype: &'a str,
    height_inches: i32,
    height: String,
    weight_pounds: i32,
    age: i32,
    dominant_hand: &'a str,
    jersey_number: i32,
    origin_type: &'a str,
    origin: &'a str,
}

impl<'a> From<&'a PlayerRecord> for CsvRow<'a> {
    fn from(p: &'a PlayerRecord) -> Self {
        Self {
            id: &p.id,
            name: &p.name,
            sport: p.sport.label(),
            position: p.position.code(),
            archetype: &p.archetype_label,
            height_inches: p.height_inches,
            height: inches_to_ft_in(p.height_inches),
            weight_pounds: p.weight_pounds,
            age: p.age,
            dominant_hand: p.dominant_hand.as_str(),
            jersey_number: p.jersey_number,
            origin_type: p.origin_type.as_str(),
            origin: &p.origin_value,
        }
    }
}

/// Write a header row and one row per player.
pub fn write_csv<W: Write>(players: &[PlayerRecord], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for p in players {
        writer
            .serialize(CsvRow::from(p))
            .with_context(|| format!("failed to write CSV row for {}", p.name))?;
    }
    if players.is_empty() {
        writer
            .write_record(CSV_HEADER)
            .context("failed to write CSV header")?;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Column names, matching `CsvRow`'s field order.
const CSV_HEADER: [&str; 13] = [
    "id",
    "name",
    "sport",
    "position",
    "archetype",
    "height_inches",
    "height",
    "weight_pounds",
    "age",
    "dominant_hand",
    "jersey_number",
    "origin_type",
    "origin",
];

/// Render `players` in `format` to `out`.
pub fn export<W: Write>(players: &[PlayerRecord], format: ExportFormat, mut out: W) -> Result<()> {
    match format {
        ExportFormat::Text => out
            .write_all(to_text(players).as_bytes())
            .context("failed to write text export"),
        ExportFormat::Csv => write_csv(players, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospect_core::player::{Hand, OriginType};
    use prospect_core::sport::{Position, Sport};

    fn sample() -> PlayerRecord {
        PlayerRecord {
            id: "abc".into(),
            name: "Jalen Brooks".into(),
            sport: Sport::AmericanFootball,
            position: Position::WideReceiver,
            archetype_label: "Outside WR".into(),
            height_inches: 74,
            weight_pounds: 205,
            age: 23,
            dominant_hand: Hand::Right,
            jersey_number: 11,
            origin_type: OriginType::College,
            origin_value: "Texas A&M".into(),
        }
    }

    #[test]
    fn text_line_format() {
        assert_eq!(
            text_line(1, &sample()),
            "1. Jalen Brooks — NFL WR • Outside WR • 6'2\", 205 lb • Age 23 • #11 • Texas A&M"
        );
    }

    #[test]
    fn text_export_numbers_lines() {
        let mut second = sample();
        second.name = "Trey Hill".into();
        let text = to_text(&[sample(), second]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. Jalen Brooks"));
        assert!(lines[1].starts_with("2. Trey Hill"));
    }

    #[test]
    fn csv_has_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&[sample()], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some("abc,Jalen Brooks,NFL,WR,Outside WR,74,\"6'2\"\"\",205,23,Right,11,college,Texas A&M")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_csv_still_has_header() {
        let mut buf = Vec::new();
        export(&[], ExportFormat::Csv, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", CSV_HEADER.join(",")));
    }
}
