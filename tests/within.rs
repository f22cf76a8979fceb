#[path = "within/maximal.rs"]
mod maximal;
#[path = "within/threshold.rs"]
mod threshold;
