// Components of the goalie's decision engine, leaves first.
pub mod critical_points;
pub mod lag;
pub mod reaction;
pub mod guess;
pub mod learning;
