pub mod stage1_window;
pub mod stage2_normalize;
pub mod stage3_submetrics;
pub mod stage4_pillars;
pub mod stage5_vitality;
pub mod stage6_breakdown;
pub mod stage7_report;
