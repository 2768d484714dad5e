/// Read and write operations on accounts, torrents and peer records.
pub mod swarm_store;
