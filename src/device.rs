//! Compute device detection and placement policy
//!
//! Provides CUDA detection with automatic fallback to CPU. Detection is
//! performed once per splitter construction, never at module scope, so
//! tests can force the CPU path through [`Placement`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compute device a partition's arrays are placed on.
///
/// Arrays are host-resident; the device is recorded on each partition as
/// advisory placement for downstream consumers and has no effect on the
/// split results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeDevice {
    /// CPU-only execution
    Cpu,
    /// CUDA GPU with device ID
    Cuda { device_id: usize },
}

impl ComputeDevice {
    /// Auto-detect best available device, preferring CUDA.
    #[must_use]
    pub fn auto_detect() -> Self {
        if Self::cuda_available() {
            Self::Cuda { device_id: 0 }
        } else {
            Self::Cpu
        }
    }

    /// Check if CUDA is available via environment and nvidia-smi.
    #[must_use]
    pub fn cuda_available() -> bool {
        if std::env::var("CUDA_VISIBLE_DEVICES").is_ok() {
            return true;
        }

        std::process::Command::new("nvidia-smi")
            .arg("--query-gpu=name")
            .arg("--format=csv,noheader")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Check if this device is CUDA
    #[must_use]
    pub const fn is_cuda(&self) -> bool {
        matches!(self, Self::Cuda { .. })
    }

    /// Check if this device is CPU
    #[must_use]
    pub const fn is_cpu(&self) -> bool {
        matches!(self, Self::Cpu)
    }

    /// Get device ID for CUDA devices
    #[must_use]
    pub const fn device_id(&self) -> Option<usize> {
        match self {
            Self::Cuda { device_id } => Some(*device_id),
            Self::Cpu => None,
        }
    }
}

impl fmt::Display for ComputeDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "CPU"),
            Self::Cuda { device_id } => write!(f, "CUDA:{device_id}"),
        }
    }
}

/// Device placement policy, resolved once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Probe for an accelerator, fall back to CPU
    #[default]
    Auto,
    /// Force host placement regardless of available accelerators
    Cpu,
    /// Force a specific CUDA device
    Cuda(usize),
}

impl Placement {
    /// Resolve the policy to a concrete device.
    #[must_use]
    pub fn resolve(self) -> ComputeDevice {
        match self {
            Self::Auto => ComputeDevice::auto_detect(),
            Self::Cpu => ComputeDevice::Cpu,
            Self::Cuda(device_id) => ComputeDevice::Cuda { device_id },
        }
    }
}
