//! Fixed-layout `tsp.dat` parser.
//!
//! Layout, line numbers 1-based:
//! - line 1: file comment, skipped
//! - line 2: `populationSize generations length xSize ySize`
//! - lines 3-4: spacer, skipped
//! - next `length + 1` rows: `x y [...]`, whitespace-delimited
//! - from line `length + 8` to EOF: `generation,pathLength,city_0,...,
//!   city_{length-1},unused` — the format switches to comma-delimited here.

use crate::error::{PlotError, PlotResult};
use crate::results::{GenerationRecord, RunHeader, SolverRun};
use std::path::Path;

const HEADER_SKIP: usize = 1;
const POINTS_SKIP: usize = 4;

/// Parser for solver results files
#[derive(Debug)]
pub struct DatParser;

impl DatParser {
    /// Parse a results file from disk.
    pub fn parse_file(path: &Path) -> PlotResult<SolverRun> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse results file content.
    pub fn parse(content: &str, path: &Path) -> PlotResult<SolverRun> {
        let lines: Vec<&str> = content.lines().collect();

        let header = Self::parse_header(&lines, path)?;
        let points = Self::parse_points(&lines, path, header.length)?;
        let records = Self::parse_records(&lines, path, header.length, points.len())?;

        Ok(SolverRun {
            header,
            points,
            records,
        })
    }

    fn parse_header(lines: &[&str], path: &Path) -> PlotResult<RunHeader> {
        let line_num = HEADER_SKIP + 1;
        let row = lines
            .get(HEADER_SKIP)
            .ok_or_else(|| PlotError::parse(path, None, "file too short for header row"))?;

        let fields: Vec<&str> = row.split_whitespace().collect();
        if fields.len() < 5 {
            return Err(PlotError::parse(
                path,
                Some(line_num),
                format!("header row has {} fields, expected 5", fields.len()),
            ));
        }

        Ok(RunHeader {
            population_size: parse_index(fields[0], path, line_num)?,
            generations: parse_index(fields[1], path, line_num)?,
            length: parse_index(fields[2], path, line_num)?,
            x_size: parse_float(fields[3], path, line_num)?,
            y_size: parse_float(fields[4], path, line_num)?,
        })
    }

    /// Point table: `length + 1` whitespace-delimited rows after the first
    /// 4 lines. Extra columns beyond (x, y) are ignored.
    fn parse_points(lines: &[&str], path: &Path, length: usize) -> PlotResult<Vec<(f64, f64)>> {
        let wanted = length + 1;
        let mut points = Vec::with_capacity(wanted);

        for (idx, row) in data_rows(lines, POINTS_SKIP).take(wanted) {
            let line_num = idx + 1;
            let fields: Vec<&str> = row.split_whitespace().collect();
            if fields.len() < 2 {
                return Err(PlotError::parse(
                    path,
                    Some(line_num),
                    format!("point row has {} fields, expected at least 2", fields.len()),
                ));
            }
            let x = parse_float(fields[0], path, line_num)?;
            let y = parse_float(fields[1], path, line_num)?;
            points.push((x, y));
        }

        if points.len() < wanted {
            return Err(PlotError::parse(
                path,
                None,
                format!("point table has {} rows, expected {wanted}", points.len()),
            ));
        }

        Ok(points)
    }

    /// Path table: every remaining row after line `length + 7`, comma-
    /// delimited. Each row carries `generation, pathLength`, the tour, and
    /// one trailing column that is not part of the tour and is discarded.
    fn parse_records(
        lines: &[&str],
        path: &Path,
        length: usize,
        num_points: usize,
    ) -> PlotResult<Vec<GenerationRecord>> {
        let min_fields = length + 3;
        let mut records = Vec::new();

        for (idx, row) in data_rows(lines, length + 7) {
            let line_num = idx + 1;
            let fields: Vec<&str> = row.split(',').map(str::trim).collect();
            if fields.len() < min_fields {
                return Err(PlotError::parse(
                    path,
                    Some(line_num),
                    format!(
                        "path row has {} fields, expected at least {min_fields}",
                        fields.len()
                    ),
                ));
            }

            let generation = parse_index(fields[0], path, line_num)?;
            let path_length = parse_float(fields[1], path, line_num)?;

            let mut tour = Vec::with_capacity(length);
            for field in &fields[2..2 + length] {
                let city = parse_index(field, path, line_num)?;
                if city >= num_points {
                    return Err(PlotError::parse(
                        path,
                        Some(line_num),
                        format!("city index {city} out of range (point table has {num_points} entries)"),
                    ));
                }
                tour.push(city);
            }

            records.push(GenerationRecord {
                generation,
                path_length,
                tour,
            });
        }

        Ok(records)
    }
}

/// Non-empty rows starting after the first `skip` lines, with the 0-based
/// line index of each.
fn data_rows<'a>(
    lines: &'a [&'a str],
    skip: usize,
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    lines
        .iter()
        .enumerate()
        .skip(skip)
        .filter(|(_, row)| !row.trim().is_empty())
        .map(|(idx, row)| (idx, *row))
}

fn parse_float(field: &str, path: &Path, line_num: usize) -> PlotResult<f64> {
    field
        .parse()
        .map_err(|_| PlotError::parse(path, Some(line_num), format!("invalid number: {field}")))
}

/// Integer fields are written by the solver as plain numeric columns, so
/// accept a float representation and truncate, as a numeric table loader
/// would.
fn parse_index(field: &str, path: &Path, line_num: usize) -> PlotResult<usize> {
    let value = parse_float(field, path, line_num)?;
    if value < 0.0 {
        return Err(PlotError::parse(
            path,
            Some(line_num),
            format!("expected non-negative integer: {field}"),
        ));
    }
    Ok(value as usize)
}
