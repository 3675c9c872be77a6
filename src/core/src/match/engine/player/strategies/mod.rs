pub mod defenders;
pub mod forwarders;
pub mod goalkeepers;
pub mod midfielders;
