pub mod check;
pub mod cultures;
pub mod jsonl;
pub mod run;
