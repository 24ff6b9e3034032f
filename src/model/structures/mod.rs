pub mod challenge_rank;
pub mod chart;
pub mod contribution;
pub mod difficulty;
pub mod grade;
pub mod play_record;
pub mod rating_result;
