/// Ports module defining the interfaces of the hexagonal architecture
///
/// The application core is driven directly through its use cases, so only
/// outbound (driven) ports are declared here.
pub mod outbound;
