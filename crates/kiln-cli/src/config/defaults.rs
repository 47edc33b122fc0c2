use kiln_core::DEFAULT_PORT;

pub fn default_port() -> u16 {
    DEFAULT_PORT
}
