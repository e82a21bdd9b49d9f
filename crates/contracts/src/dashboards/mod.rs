pub mod d400_stats;
