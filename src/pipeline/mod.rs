pub mod stage1_normalize;
pub mod stage2_score;
pub mod stage3_rank;
pub mod stage4_suggest;
pub mod stage5_report;
