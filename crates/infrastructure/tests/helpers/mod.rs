pub mod udp_server;
pub mod wire;
