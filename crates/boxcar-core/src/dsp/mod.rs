pub mod moving_avg;
