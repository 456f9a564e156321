pub mod d400_admin_metrics;
