//! Tests for survey progress tracking

#[cfg(test)]
mod tests {
    use dungeon_cells::io::progress::SurveyProgress;

    // Tests a hidden tracker still counts finished seeds
    // Verified by making advance a no-op when hidden
    #[test]
    fn test_hidden_progress_counts() {
        let progress = SurveyProgress::new(5, false);
        for seed in 10..13 {
            progress.advance(seed);
        }
        assert_eq!(progress.position(), 3);
        progress.finish();
    }

    // Tests a fresh tracker starts at zero
    // Verified by incrementing the bar in new
    #[test]
    fn test_initial_position() {
        assert_eq!(SurveyProgress::new(1, false).position(), 0);
    }
}
