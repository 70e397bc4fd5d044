//! Type definitions and enums.

use crate::consts;

/// Which VMware product a [`Host`](crate::Host) connection talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceProvider {
    /// Let the library pick the installed product.
    #[default]
    Default,
    /// VMware Server.
    Server,
    /// VMware Workstation.
    Workstation,
    /// VMware Player.
    Player,
    /// vCenter / ESX over the VI API.
    ViServer,
}

impl From<ServiceProvider> for i32 {
    fn from(provider: ServiceProvider) -> i32 {
        match provider {
            ServiceProvider::Default => consts::VIX_SERVICEPROVIDER_DEFAULT,
            ServiceProvider::Server => consts::VIX_SERVICEPROVIDER_VMWARE_SERVER,
            ServiceProvider::Workstation => consts::VIX_SERVICEPROVIDER_VMWARE_WORKSTATION,
            ServiceProvider::Player => consts::VIX_SERVICEPROVIDER_VMWARE_PLAYER,
            ServiceProvider::ViServer => consts::VIX_SERVICEPROVIDER_VMWARE_VI_SERVER,
        }
    }
}

/// Where a variable read/write is directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariableScope {
    /// Guest variable (shared between host and guest, not persisted).
    #[default]
    Guest,
    /// Runtime-only VM configuration value.
    ConfigRuntime,
    /// Environment variable inside the guest OS.
    GuestEnvironment,
}

impl From<VariableScope> for i32 {
    fn from(scope: VariableScope) -> i32 {
        match scope {
            VariableScope::Guest => consts::VIX_VM_GUEST_VARIABLE,
            VariableScope::ConfigRuntime => consts::VIX_VM_CONFIG_RUNTIME_ONLY,
            VariableScope::GuestEnvironment => consts::VIX_GUEST_ENVIRONMENT_VARIABLE,
        }
    }
}

/// Clone flavor for [`Vm::clone_to`](crate::Vm::clone_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloneType {
    /// Independent full copy of the virtual machine.
    #[default]
    Full,
    /// Linked clone sharing disks with the source snapshot.
    Linked,
}

impl From<CloneType> for i32 {
    fn from(clone_type: CloneType) -> i32 {
        match clone_type {
            CloneType::Full => consts::VIX_CLONETYPE_FULL,
            CloneType::Linked => consts::VIX_CLONETYPE_LINKED,
        }
    }
}

/// Power operation option bits.
pub mod power {
    /// Plain power operation.
    pub const NORMAL: i32 = crate::consts::VIX_VMPOWEROP_NORMAL;
    /// Issue the operation through the guest OS.
    pub const FROM_GUEST: i32 = crate::consts::VIX_VMPOWEROP_FROM_GUEST;
    /// Skip the power-on snapshot.
    pub const SUPPRESS_SNAPSHOT_POWERON: i32 =
        crate::consts::VIX_VMPOWEROP_SUPPRESS_SNAPSHOT_POWERON;
    /// Show the product UI for this VM.
    pub const LAUNCH_GUI: i32 = crate::consts::VIX_VMPOWEROP_LAUNCH_GUI;
    /// Start the VM paused.
    pub const START_VM_PAUSED: i32 = crate::consts::VIX_VMPOWEROP_START_VM_PAUSED;
}

/// Guest program option bits.
pub mod run {
    /// Return as soon as the program starts instead of waiting for exit.
    pub const RETURN_IMMEDIATELY: i32 = crate::consts::VIX_RUNPROGRAM_RETURN_IMMEDIATELY;
    /// Show the program window on an interactive desktop.
    pub const ACTIVATE_WINDOW: i32 = crate::consts::VIX_RUNPROGRAM_ACTIVATE_WINDOW;
}

/// Guest login option bits.
pub mod login {
    /// Require an interactive session (needed for desktop interaction).
    pub const REQUIRE_INTERACTIVE_ENVIRONMENT: i32 =
        crate::consts::VIX_LOGIN_IN_GUEST_REQUIRE_INTERACTIVE_ENVIRONMENT;
}

/// Snapshot option bits.
pub mod snapshot {
    /// Remove child snapshots together with the snapshot.
    pub const REMOVE_CHILDREN: i32 = crate::consts::VIX_SNAPSHOT_REMOVE_CHILDREN;
    /// Capture the memory image in the snapshot.
    pub const INCLUDE_MEMORY: i32 = crate::consts::VIX_SNAPSHOT_INCLUDE_MEMORY;
}

/// VM delete option bits.
pub mod delete {
    /// Also delete the disk files.
    pub const DISK_FILES: i32 = crate::consts::VIX_VMDELETE_DISK_FILES;
}

/// Shared folder flag bits.
pub mod folder {
    /// Guest may write through the share.
    pub const WRITE_ACCESS: i32 = crate::consts::VIX_SHAREDFOLDER_WRITE_ACCESS;
}

/// Tools installer option bits.
pub mod tools {
    /// Just mount the installer image in the guest.
    pub const MOUNT_INSTALLER: i32 = crate::consts::VIX_INSTALLTOOLS_MOUNT_TOOLS_INSTALLER;
    /// Upgrade automatically without guest interaction.
    pub const AUTO_UPGRADE: i32 = crate::consts::VIX_INSTALLTOOLS_AUTO_UPGRADE;
    /// Do not wait for the installer to finish.
    pub const RETURN_IMMEDIATELY: i32 = crate::consts::VIX_INSTALLTOOLS_RETURN_IMMEDIATELY;
}

/// Options for connecting a [`Host`](crate::Host).
///
/// The defaults connect to the product installed on the local machine.
/// Remote service providers (VI server) need `host`, `username` and
/// `password`.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Remote host URL (e.g. `https://esx.example.com/sdk`).
    pub host: Option<String>,
    /// Remote port (0 for the default).
    pub port: i32,
    /// Remote user name.
    pub username: Option<String>,
    /// Remote password.
    pub password: Option<String>,
}

/// Result of running a program or script in the guest.
///
/// Only the process id and exit code are reported by the library's job
/// result for these operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramResult {
    /// Process id inside the guest.
    pub pid: u64,
    /// Exit code of the program.
    pub exit_code: i32,
}

/// One process inside the guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestProcess {
    /// Executable name.
    pub name: String,
    /// Process id.
    pub pid: u64,
    /// Owning user.
    pub owner: String,
    /// Full command line.
    pub command: String,
}

/// State of one shared folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFolder {
    /// Share name as seen by the guest.
    pub name: String,
    /// Host directory backing the share.
    pub host_path: String,
    /// Flag bits (see [`folder`]).
    pub flags: i32,
}

/// Metadata for a file or directory in the guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestFileInfo {
    /// Attribute bits (`VIX_FILE_ATTRIBUTES_*`).
    pub flags: i32,
    /// Size in bytes.
    pub size: i64,
}

impl GuestFileInfo {
    /// Whether the path is a directory.
    pub fn is_dir(&self) -> bool {
        self.flags & consts::VIX_FILE_ATTRIBUTES_DIRECTORY != 0
    }

    /// Whether the path is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.flags & consts::VIX_FILE_ATTRIBUTES_SYMLINK != 0
    }
}
