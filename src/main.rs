use anyhow::{Context, Result};
use clap::Parser;
use sparsegrid::{Coordinate, Grid, GridConfig, GridError};
use tracing_subscriber::EnvFilter;

/// Builds a sparse grid, walks its first row and column and prints the board.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 9)]
    rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = 9)]
    cols: usize,

    /// Cell assignment, may be repeated
    #[arg(long = "set", value_name = "ROW,COL=VALUE", value_parser = parse_assignment)]
    cells: Vec<(Coordinate, String)>,

    /// First position of the partial walks
    #[arg(long, default_value_t = 1)]
    start: usize,

    /// Position after the last one of the partial walks
    #[arg(long, default_value_t = 5)]
    stop: usize,

    /// Reject assignments outside the grid
    #[arg(long)]
    strict: bool,
}

fn parse_assignment(input: &str) -> Result<(Coordinate, String), GridError> {
    let (key, value) = input.split_once('=').ok_or_else(|| {
        GridError::InvalidKey(format!("expected ROW,COL=VALUE, got {:?}", input))
    })?;
    Ok((key.parse()?, value.to_string()))
}

fn print_cells<'a>(
    heading: &str,
    cells: impl Iterator<Item = (Coordinate, Option<&'a String>)>,
) {
    println!("{heading}");
    for (coordinate, value) in cells {
        match value {
            Some(value) => println!("{coordinate} {value}"),
            None => println!("{coordinate} None"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = if args.strict {
        GridConfig::strict()
    } else {
        GridConfig::default()
    };

    let mut grid = Grid::with_config(args.rows, args.cols, config);
    for (coordinate, value) in args.cells {
        grid.set(coordinate, value)
            .with_context(|| format!("Failed to set cell {coordinate}"))?;
    }

    let (start, stop) = (args.start, args.stop);
    let last = stop.saturating_sub(1);
    print_cells("All Columns", grid.row(0).iter().with_coordinates());
    print_cells(
        &format!("Columns {start}-{last}"),
        grid.row(0).iter_range(start, Some(stop)).with_coordinates(),
    );
    print_cells("All Rows", grid.col(0).iter().with_coordinates());
    print_cells(
        &format!("Rows {start}-{last}"),
        grid.col(0).iter_range(start, Some(stop)).with_coordinates(),
    );
    println!("{grid}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("2,3=X"),
            Ok((Coordinate::new(2, 3), "X".to_string()))
        );
        // Only the first '=' separates key and value
        assert_eq!(
            parse_assignment("0,0=a=b"),
            Ok((Coordinate::new(0, 0), "a=b".to_string()))
        );
    }

    #[test_case("2,3" ; "missing value")]
    #[test_case("2=X" ; "bare integer key")]
    #[test_case("2,3,4=X" ; "three component key")]
    fn test_parse_invalid_assignment(input: &str) {
        assert!(matches!(
            parse_assignment(input),
            Err(GridError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["sparsegrid"]).unwrap();
        assert_eq!((args.rows, args.cols), (9, 9));
        assert_eq!((args.start, args.stop), (1, 5));
        assert!(args.cells.is_empty());
        assert!(!args.strict);
    }

    #[test]
    fn test_args_repeated_cells() {
        let args = Args::try_parse_from([
            "sparsegrid",
            "--rows",
            "3",
            "--set",
            "0,0=X",
            "--set",
            "1,1=O",
            "--strict",
        ])
        .unwrap();
        assert_eq!(args.rows, 3);
        assert_eq!(
            args.cells,
            vec![
                (Coordinate::new(0, 0), "X".to_string()),
                (Coordinate::new(1, 1), "O".to_string()),
            ]
        );
        assert!(args.strict);
    }

    #[test]
    fn test_args_reject_malformed_cell() {
        assert!(Args::try_parse_from(["sparsegrid", "--set", "1=X"]).is_err());
    }
}
