use crate::config::types::*;

// CLI enums -> config enums

impl From<crate::cli::TargetArg> for BuildTarget {
    fn from(t: crate::cli::TargetArg) -> Self {
        match t {
            crate::cli::TargetArg::Native => BuildTarget::Native,
            crate::cli::TargetArg::Browser => BuildTarget::Browser,
        }
    }
}

impl From<crate::cli::DependencyArg> for DependencyName {
    fn from(d: crate::cli::DependencyArg) -> Self {
        match d {
            crate::cli::DependencyArg::Graphics => DependencyName::Graphics,
            crate::cli::DependencyArg::Networking => DependencyName::Networking,
        }
    }
}

impl From<crate::cli::HostOsArg> for kiln_core::HostOs {
    fn from(os: crate::cli::HostOsArg) -> Self {
        match os {
            crate::cli::HostOsArg::Windows => kiln_core::HostOs::Windows,
            crate::cli::HostOsArg::Linux => kiln_core::HostOs::Linux,
            crate::cli::HostOsArg::Other => kiln_core::HostOs::Other,
        }
    }
}

// Config enums -> core types

impl From<BuildTarget> for kiln_core::Target {
    fn from(t: BuildTarget) -> Self {
        match t {
            BuildTarget::Native => kiln_core::Target::Native,
            BuildTarget::Browser => kiln_core::Target::Browser,
        }
    }
}

impl From<DependencyName> for kiln_core::Dependency {
    fn from(d: DependencyName) -> Self {
        match d {
            DependencyName::Graphics => kiln_core::Dependency::Graphics,
            DependencyName::Networking => kiln_core::Dependency::Networking,
        }
    }
}
