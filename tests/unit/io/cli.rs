//! Tests for command-line parsing and command execution

#[cfg(test)]
mod tests {
    use clap::Parser;
    use dungeon_cells::io::cli::{Cli, CommandRunner, SourceKind, generate_with};
    use dungeon_cells::io::configuration::{
        CELL_BLOCK_SIZE, DEFAULT_SEED, DEFAULT_SURVEY_SEEDS, MapSize,
    };

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("program").chain(args.iter().copied()))
    }

    fn run(args: &[&str]) -> String {
        let mut out = Vec::new();
        CommandRunner::new(parse(args))
            .run(&mut out)
            .expect("command failed");
        String::from_utf8(out).expect("output is utf-8")
    }

    // Tests defaults when no arguments are given
    // Verified by changing the default seed attribute
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = parse(&[]);
        assert_eq!(cli.size, MapSize::Small);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.source, SourceKind::ParkMiller);
        assert_eq!(cli.survey_seeds(), None);
        assert!(!cli.cells);
        assert!(!cli.no_markers);
        assert!(!cli.quiet);
    }

    // Tests every argument is wired to its field
    // Verified by swapping the short flags for width and height
    #[test]
    fn test_cli_parse_all_args() {
        let cli = parse(&[
            "--size", "large", "-w", "7", "-H", "3", "-s", "99", "--source", "std", "--cells",
            "--no-markers", "--survey", "12", "-q",
        ]);
        assert_eq!(cli.size, MapSize::Large);
        assert_eq!(cli.width, Some(7));
        assert_eq!(cli.height, Some(3));
        assert_eq!(cli.seed, 99);
        assert_eq!(cli.source, SourceKind::Std);
        assert!(cli.cells);
        assert!(cli.no_markers);
        assert_eq!(cli.survey_seeds(), Some(12));
        assert!(cli.quiet);
    }

    // Tests a bare survey flag falls back to the default seed count
    // Verified by returning None from survey_seeds for a bare flag
    #[test]
    fn test_bare_survey_flag() {
        let cli = parse(&["--survey"]);
        assert_eq!(cli.survey, Some(None));
        assert_eq!(cli.survey_seeds(), Some(DEFAULT_SURVEY_SEEDS));
    }

    // Tests dimension overrides against the preset
    // Verified by making a lone height imply a square grid
    #[test]
    fn test_dimensions() {
        assert_eq!(parse(&["--size", "medium"]).dimensions(), (11, 11));
        assert_eq!(parse(&["-w", "6"]).dimensions(), (6, 6));
        assert_eq!(parse(&["-H", "4"]).dimensions(), (5, 4));
        assert_eq!(parse(&["-w", "6", "-H", "4"]).dimensions(), (6, 4));
    }

    // Tests the marker flag is carried into the generator configuration
    // Verified by passing no_markers through without negation
    #[test]
    fn test_config_for() {
        let config = parse(&["--no-markers", "-w", "3"]).config_for(17);
        assert_eq!((config.width, config.height, config.seed), (3, 3, 17));
        assert!(!config.place_markers);
        assert!(parse(&[]).config_for(1).place_markers);
    }

    // Tests both sources generate complete layouts
    // Verified by routing Std through ParkMiller
    #[test]
    fn test_generate_with_sources() {
        let config = parse(&["-w", "6"]).config_for(3);
        let reference = generate_with(config, SourceKind::ParkMiller).expect("generation failed");
        let alternative = generate_with(config, SourceKind::Std).expect("generation failed");
        assert_eq!(reference.cells.width(), alternative.cells.width());
        assert!(alternative.cells.is_occupied(alternative.start));
        assert_eq!(reference.start, alternative.start);
    }

    // Tests tile output has one line per tile row
    // Verified by skipping the last row in render_tiles
    #[test]
    fn test_run_prints_tiles() {
        let output = run(&["-w", "2", "-H", "3"]);
        assert_eq!(output.lines().count(), 3 * CELL_BLOCK_SIZE);
        assert!(output.contains('E'));
    }

    // Tests cell output for the pinned layout
    // Verified by indexing the glyph table with reversed bits
    #[test]
    fn test_run_prints_cells() {
        let output = run(&["--cells"]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines.first().copied(), Some("╷╷┌─╴"));
        assert!(lines.iter().all(|line| line.chars().count() == 5));
    }

    // Tests survey mode prints a single summary line
    // Verified by recording only the first seed
    #[test]
    fn test_run_survey() {
        let output = run(&["--survey", "3", "-q", "-w", "4"]);
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("3 dungeons: coverage mean"));
    }

    // Tests invalid dimensions surface as errors rather than output
    // Verified by clamping zero widths to one
    #[test]
    fn test_run_rejects_zero_width() {
        let mut out = Vec::new();
        let result = CommandRunner::new(parse(&["-w", "0"])).run(&mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
