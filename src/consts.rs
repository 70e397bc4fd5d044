//! The VIX constant surface.
//!
//! Every constant re-exported by the original `vix.h` binding surface, with
//! identical names and numeric values, so code ported from other VIX
//! bindings can keep its error-code and option comparisons unchanged.
//!
//! Error codes are `u64` so they compare directly against the masked
//! category of a raw 64-bit error value (see [`Error::code`]); handle types,
//! property ids and option flags are `i32`, matching the `int` parameters of
//! the native entry points.
//!
//! [`Error::code`]: crate::Error::code

// Handles
pub const VIX_INVALID_HANDLE: i32 = 0;

// Handle types
pub const VIX_HANDLETYPE_NONE: i32 = 0;
pub const VIX_HANDLETYPE_HOST: i32 = 2;
pub const VIX_HANDLETYPE_VM: i32 = 3;
pub const VIX_HANDLETYPE_NETWORK: i32 = 5;
pub const VIX_HANDLETYPE_JOB: i32 = 6;
pub const VIX_HANDLETYPE_SNAPSHOT: i32 = 7;
pub const VIX_HANDLETYPE_PROPERTY_LIST: i32 = 9;
pub const VIX_HANDLETYPE_METADATA_CONTAINER: i32 = 11;

// Error codes. Zero is success; everything else is the low-bits category of
// a failed operation.
pub const VIX_OK: u64 = 0;

// General errors
pub const VIX_E_FAIL: u64 = 1;
pub const VIX_E_OUT_OF_MEMORY: u64 = 2;
pub const VIX_E_INVALID_ARG: u64 = 3;
pub const VIX_E_FILE_NOT_FOUND: u64 = 4;
pub const VIX_E_OBJECT_IS_BUSY: u64 = 5;
pub const VIX_E_NOT_SUPPORTED: u64 = 6;
pub const VIX_E_FILE_ERROR: u64 = 7;
pub const VIX_E_DISK_FULL: u64 = 8;
pub const VIX_E_INCORRECT_FILE_TYPE: u64 = 9;
pub const VIX_E_CANCELLED: u64 = 10;
pub const VIX_E_FILE_READ_ONLY: u64 = 11;
pub const VIX_E_FILE_ALREADY_EXISTS: u64 = 12;
pub const VIX_E_FILE_ACCESS_ERROR: u64 = 13;
pub const VIX_E_REQUIRES_LARGE_FILES: u64 = 14;
pub const VIX_E_FILE_ALREADY_LOCKED: u64 = 15;
pub const VIX_E_VMDB: u64 = 16;
pub const VIX_E_NOT_SUPPORTED_ON_REMOTE_OBJECT: u64 = 20;
pub const VIX_E_FILE_TOO_BIG: u64 = 21;
pub const VIX_E_FILE_NAME_INVALID: u64 = 22;
pub const VIX_E_ALREADY_EXISTS: u64 = 23;
pub const VIX_E_BUFFER_TOOSMALL: u64 = 24;
pub const VIX_E_OBJECT_NOT_FOUND: u64 = 25;
pub const VIX_E_HOST_NOT_CONNECTED: u64 = 26;
pub const VIX_E_INVALID_UTF8_STRING: u64 = 27;
pub const VIX_E_UNFINISHED_JOB: u64 = 29;
pub const VIX_E_NEED_KEY: u64 = 30;
pub const VIX_E_OPERATION_ALREADY_IN_PROGRESS: u64 = 31;
pub const VIX_E_LICENSE: u64 = 32;
pub const VIX_E_VM_HOST_DISCONNECTED: u64 = 34;
pub const VIX_E_AUTHENTICATION_FAIL: u64 = 35;

// Handle errors
pub const VIX_E_INVALID_HANDLE: u64 = 1000;
pub const VIX_E_NOT_SUPPORTED_ON_HANDLE_TYPE: u64 = 1001;
pub const VIX_E_TOO_MANY_HANDLES: u64 = 1002;

// XML errors
pub const VIX_E_NOT_FOUND: u64 = 2000;
pub const VIX_E_TYPE_MISMATCH: u64 = 2001;
pub const VIX_E_INVALID_XML: u64 = 2002;

// VM control errors
pub const VIX_E_TIMEOUT_WAITING_FOR_TOOLS: u64 = 3000;
pub const VIX_E_UNRECOGNIZED_COMMAND: u64 = 3001;
pub const VIX_E_OP_NOT_SUPPORTED_ON_GUEST: u64 = 3003;
pub const VIX_E_PROGRAM_NOT_STARTED: u64 = 3004;
pub const VIX_E_CANNOT_START_READ_ONLY_VM: u64 = 3005;
pub const VIX_E_VM_NOT_RUNNING: u64 = 3006;
pub const VIX_E_VM_IS_RUNNING: u64 = 3007;
pub const VIX_E_CANNOT_CONNECT_TO_VM: u64 = 3008;
pub const VIX_E_POWEROP_SCRIPTS_NOT_AVAILABLE: u64 = 3009;
pub const VIX_E_NO_GUEST_OS_INSTALLED: u64 = 3010;
pub const VIX_E_VM_INSUFFICIENT_HOST_MEMORY: u64 = 3011;
pub const VIX_E_SUSPEND_ERROR: u64 = 3012;
pub const VIX_E_VM_NOT_ENOUGH_CPUS: u64 = 3013;
pub const VIX_E_HOST_USER_PERMISSIONS: u64 = 3014;
pub const VIX_E_GUEST_USER_PERMISSIONS: u64 = 3015;
pub const VIX_E_TOOLS_NOT_RUNNING: u64 = 3016;
pub const VIX_E_GUEST_OPERATIONS_PROHIBITED: u64 = 3017;
pub const VIX_E_ANON_GUEST_OPERATIONS_PROHIBITED: u64 = 3018;
pub const VIX_E_ROOT_GUEST_OPERATIONS_PROHIBITED: u64 = 3019;
pub const VIX_E_MISSING_ANON_GUEST_ACCOUNT: u64 = 3023;
pub const VIX_E_CANNOT_AUTHENTICATE_WITH_GUEST: u64 = 3024;
pub const VIX_E_UNRECOGNIZED_COMMAND_IN_GUEST: u64 = 3025;
pub const VIX_E_CONSOLE_GUEST_OPERATIONS_PROHIBITED: u64 = 3026;
pub const VIX_E_MUST_BE_CONSOLE_USER: u64 = 3027;
pub const VIX_E_VMX_MSG_DIALOG_AND_NO_UI: u64 = 3028;
pub const VIX_E_NOT_ALLOWED_DURING_VM_RECORDING: u64 = 3029;
pub const VIX_E_NOT_ALLOWED_DURING_VM_REPLAY: u64 = 3030;
pub const VIX_E_OPERATION_NOT_ALLOWED_FOR_LOGIN_TYPE: u64 = 3031;
pub const VIX_E_LOGIN_TYPE_NOT_SUPPORTED: u64 = 3032;
pub const VIX_E_EMPTY_PASSWORD_NOT_ALLOWED_IN_GUEST: u64 = 3033;
pub const VIX_E_INTERACTIVE_SESSION_NOT_PRESENT: u64 = 3034;
pub const VIX_E_INTERACTIVE_SESSION_USER_MISMATCH: u64 = 3035;
pub const VIX_E_UNABLE_TO_REPLAY_VM: u64 = 3039;
pub const VIX_E_CANNOT_POWER_ON_VM: u64 = 3041;
pub const VIX_E_NO_DISPLAY_SERVER: u64 = 3043;
pub const VIX_E_VM_NOT_RECORDING: u64 = 3044;
pub const VIX_E_VM_NOT_REPLAYING: u64 = 3045;

// VM errors
pub const VIX_E_VM_NOT_FOUND: u64 = 4000;
pub const VIX_E_NOT_SUPPORTED_FOR_VM_VERSION: u64 = 4001;
pub const VIX_E_CANNOT_READ_VM_CONFIG: u64 = 4002;
pub const VIX_E_TEMPLATE_VM: u64 = 4003;
pub const VIX_E_VM_ALREADY_LOADED: u64 = 4004;
pub const VIX_E_VM_ALREADY_UP_TO_DATE: u64 = 4006;

// Property errors
pub const VIX_E_UNRECOGNIZED_PROPERTY: u64 = 6000;
pub const VIX_E_INVALID_PROPERTY_VALUE: u64 = 6001;
pub const VIX_E_READ_ONLY_PROPERTY: u64 = 6002;
pub const VIX_E_MISSING_REQUIRED_PROPERTY: u64 = 6003;
pub const VIX_E_INVALID_SERIALIZED_DATA: u64 = 6004;
pub const VIX_E_PROPERTY_TYPE_MISMATCH: u64 = 6005;

// Completion errors
pub const VIX_E_BAD_VM_INDEX: u64 = 8000;

// Message errors
pub const VIX_E_INVALID_MESSAGE_HEADER: u64 = 10000;
pub const VIX_E_INVALID_MESSAGE_BODY: u64 = 10001;

// Snapshot errors
pub const VIX_E_SNAPSHOT_INVAL: u64 = 13000;
pub const VIX_E_SNAPSHOT_DUMPER: u64 = 13001;
pub const VIX_E_SNAPSHOT_DISKLIB: u64 = 13002;
pub const VIX_E_SNAPSHOT_NOTFOUND: u64 = 13003;
pub const VIX_E_SNAPSHOT_EXISTS: u64 = 13004;
pub const VIX_E_SNAPSHOT_VERSION: u64 = 13005;
pub const VIX_E_SNAPSHOT_NOPERM: u64 = 13006;
pub const VIX_E_SNAPSHOT_CONFIG: u64 = 13007;
pub const VIX_E_SNAPSHOT_NOCHANGE: u64 = 13008;
pub const VIX_E_SNAPSHOT_CHECKPOINT: u64 = 13009;
pub const VIX_E_SNAPSHOT_LOCKED: u64 = 13010;
pub const VIX_E_SNAPSHOT_INCONSISTENT: u64 = 13011;
pub const VIX_E_SNAPSHOT_NAMETOOLONG: u64 = 13012;
pub const VIX_E_SNAPSHOT_VIXFILE: u64 = 13013;
pub const VIX_E_SNAPSHOT_DISKLOCKED: u64 = 13014;
pub const VIX_E_SNAPSHOT_DUPLICATEDDISK: u64 = 13015;
pub const VIX_E_SNAPSHOT_INDEPENDENTDISK: u64 = 13016;
pub const VIX_E_SNAPSHOT_NONUNIQUE_NAME: u64 = 13017;
pub const VIX_E_SNAPSHOT_MEMORY_ON_INDEPENDENT_DISK: u64 = 13018;
pub const VIX_E_SNAPSHOT_MAXSNAPSHOTS: u64 = 13019;
pub const VIX_E_SNAPSHOT_MIN_FREE_SPACE: u64 = 13020;
pub const VIX_E_SNAPSHOT_RRSUSPEND: u64 = 13021;

// Host errors
pub const VIX_E_HOST_DISK_INVALID_VALUE: u64 = 14003;
pub const VIX_E_HOST_DISK_SECTORSIZE: u64 = 14004;
pub const VIX_E_HOST_FILE_ERROR_EOF: u64 = 14005;
pub const VIX_E_HOST_NETBLKDEV_HANDSHAKE: u64 = 14006;
pub const VIX_E_HOST_SOCKET_CREATION_ERROR: u64 = 14007;
pub const VIX_E_HOST_SERVER_NOT_FOUND: u64 = 14008;
pub const VIX_E_HOST_NETWORK_CONN_REFUSED: u64 = 14009;
pub const VIX_E_HOST_TCP_SOCKET_ERROR: u64 = 14010;
pub const VIX_E_HOST_TCP_CONN_LOST: u64 = 14011;
pub const VIX_E_HOST_NBD_HASHFILE_VOLUME: u64 = 14012;
pub const VIX_E_HOST_NBD_HASHFILE_INIT: u64 = 14013;

// Disklib errors
pub const VIX_E_DISK_INVAL: u64 = 16000;
pub const VIX_E_DISK_NOINIT: u64 = 16001;
pub const VIX_E_DISK_NOIO: u64 = 16002;
pub const VIX_E_DISK_PARTIALCHAIN: u64 = 16003;
pub const VIX_E_DISK_NEEDSREPAIR: u64 = 16006;
pub const VIX_E_DISK_OUTOFRANGE: u64 = 16007;
pub const VIX_E_DISK_CID_MISMATCH: u64 = 16008;
pub const VIX_E_DISK_CANTSHRINK: u64 = 16009;
pub const VIX_E_DISK_PARTMISMATCH: u64 = 16010;
pub const VIX_E_DISK_UNSUPPORTEDDISKVERSION: u64 = 16011;
pub const VIX_E_DISK_OPENPARENT: u64 = 16012;
pub const VIX_E_DISK_NOTSUPPORTED: u64 = 16013;
pub const VIX_E_DISK_NEEDKEY: u64 = 16014;
pub const VIX_E_DISK_NOKEYOVERRIDE: u64 = 16015;
pub const VIX_E_DISK_NOTENCRYPTED: u64 = 16016;
pub const VIX_E_DISK_NOKEY: u64 = 16017;
pub const VIX_E_DISK_INVALIDPARTITIONTABLE: u64 = 16018;
pub const VIX_E_DISK_NOTNORMAL: u64 = 16019;
pub const VIX_E_DISK_NOTENCDESC: u64 = 16020;
pub const VIX_E_DISK_NEEDVMFS: u64 = 16022;
pub const VIX_E_DISK_RAWTOOBIG: u64 = 16024;
pub const VIX_E_DISK_TOOMANYOPENFILES: u64 = 16027;
pub const VIX_E_DISK_TOOMANYREDO: u64 = 16028;
pub const VIX_E_DISK_RAWTOOSMALL: u64 = 16029;
pub const VIX_E_DISK_INVALIDCHAIN: u64 = 16030;
pub const VIX_E_DISK_KEY_NOTFOUND: u64 = 16052;
pub const VIX_E_DISK_SUBSYSTEM_INIT_FAIL: u64 = 16053;
pub const VIX_E_DISK_INVALID_CONNECTION: u64 = 16054;
pub const VIX_E_DISK_ENCODING: u64 = 16061;
pub const VIX_E_DISK_CANTREPAIR: u64 = 16062;
pub const VIX_E_DISK_INVALIDDISK: u64 = 16063;
pub const VIX_E_DISK_NOLICENSE: u64 = 16064;
pub const VIX_E_DISK_NODEVICE: u64 = 16065;
pub const VIX_E_DISK_UNSUPPORTEDDEVICE: u64 = 16066;

// Crypto errors
pub const VIX_E_CRYPTO_UNKNOWN_ALGORITHM: u64 = 17000;
pub const VIX_E_CRYPTO_BAD_BUFFER_SIZE: u64 = 17001;
pub const VIX_E_CRYPTO_INVALID_OPERATION: u64 = 17002;
pub const VIX_E_CRYPTO_RANDOM_DEVICE: u64 = 17003;
pub const VIX_E_CRYPTO_NEED_PASSWORD: u64 = 17004;
pub const VIX_E_CRYPTO_BAD_PASSWORD: u64 = 17005;
pub const VIX_E_CRYPTO_NOT_IN_DICTIONARY: u64 = 17006;
pub const VIX_E_CRYPTO_NO_CRYPTO: u64 = 17007;
pub const VIX_E_CRYPTO_ERROR: u64 = 17008;
pub const VIX_E_CRYPTO_BAD_FORMAT: u64 = 17009;
pub const VIX_E_CRYPTO_LOCKED: u64 = 17010;
pub const VIX_E_CRYPTO_EMPTY: u64 = 17011;
pub const VIX_E_CRYPTO_KEYSAFE_LOCATOR: u64 = 17012;

// Remote errors
pub const VIX_E_CANNOT_CONNECT_TO_HOST: u64 = 18000;
pub const VIX_E_NOT_FOR_REMOTE_HOST: u64 = 18001;
pub const VIX_E_INVALID_HOSTNAME_SPECIFICATION: u64 = 18002;

// Screen capture errors
pub const VIX_E_SCREEN_CAPTURE_ERROR: u64 = 19000;
pub const VIX_E_SCREEN_CAPTURE_BAD_FORMAT: u64 = 19001;
pub const VIX_E_SCREEN_CAPTURE_COMPRESSION_FAIL: u64 = 19002;
pub const VIX_E_SCREEN_CAPTURE_LARGE_DATA: u64 = 19003;

// Guest errors
pub const VIX_E_GUEST_VOLUMES_NOT_FROZEN: u64 = 20000;
pub const VIX_E_NOT_A_FILE: u64 = 20001;
pub const VIX_E_NOT_A_DIRECTORY: u64 = 20002;
pub const VIX_E_NO_SUCH_PROCESS: u64 = 20003;
pub const VIX_E_FILE_NAME_TOO_LONG: u64 = 20004;

// Tools install errors
pub const VIX_E_TOOLS_INSTALL_NO_IMAGE: u64 = 21000;
pub const VIX_E_TOOLS_INSTALL_IMAGE_INACCESIBLE: u64 = 21001;
pub const VIX_E_TOOLS_INSTALL_NO_DEVICE: u64 = 21002;
pub const VIX_E_TOOLS_INSTALL_DEVICE_NOT_CONNECTED: u64 = 21003;
pub const VIX_E_TOOLS_INSTALL_CANCELLED: u64 = 21004;
pub const VIX_E_TOOLS_INSTALL_INIT_FAILED: u64 = 21005;
pub const VIX_E_TOOLS_INSTALL_AUTO_NOT_SUPPORTED: u64 = 21006;
pub const VIX_E_TOOLS_INSTALL_GUEST_NOT_READY: u64 = 21007;
pub const VIX_E_TOOLS_INSTALL_SIG_CHECK_FAILED: u64 = 21008;
pub const VIX_E_TOOLS_INSTALL_ERROR: u64 = 21009;
pub const VIX_E_TOOLS_INSTALL_ALREADY_UP_TO_DATE: u64 = 21010;
pub const VIX_E_TOOLS_INSTALL_IN_PROGRESS: u64 = 21011;

// Wrapper errors
pub const VIX_E_WRAPPER_WORKSTATION_NOT_INSTALLED: u64 = 22001;
pub const VIX_E_WRAPPER_VERSION_NOT_FOUND: u64 = 22002;
pub const VIX_E_WRAPPER_SERVICEPROVIDER_NOT_FOUND: u64 = 22003;
pub const VIX_E_WRAPPER_PLAYER_NOT_INSTALLED: u64 = 22004;

// Property types
pub const VIX_PROPERTYTYPE_ANY: i32 = 0;
pub const VIX_PROPERTYTYPE_INTEGER: i32 = 1;
pub const VIX_PROPERTYTYPE_STRING: i32 = 2;
pub const VIX_PROPERTYTYPE_BOOL: i32 = 3;
pub const VIX_PROPERTYTYPE_HANDLE: i32 = 4;
pub const VIX_PROPERTYTYPE_INT64: i32 = 5;
pub const VIX_PROPERTYTYPE_BLOB: i32 = 6;

// Property ids
pub const VIX_PROPERTY_NONE: i32 = 0;
pub const VIX_PROPERTY_META_DATA_CONTAINER: i32 = 2;
pub const VIX_PROPERTY_HOST_HOSTTYPE: i32 = 50;
pub const VIX_PROPERTY_HOST_API_VERSION: i32 = 51;
pub const VIX_PROPERTY_VM_NUM_VCPUS: i32 = 101;
pub const VIX_PROPERTY_VM_VMX_PATHNAME: i32 = 103;
pub const VIX_PROPERTY_VM_VMTEAM_PATHNAME: i32 = 105;
pub const VIX_PROPERTY_VM_MEMORY_SIZE: i32 = 106;
pub const VIX_PROPERTY_VM_READ_ONLY: i32 = 107;
pub const VIX_PROPERTY_VM_IN_VMTEAM: i32 = 128;
pub const VIX_PROPERTY_VM_POWER_STATE: i32 = 129;
pub const VIX_PROPERTY_VM_TOOLS_STATE: i32 = 152;
pub const VIX_PROPERTY_VM_IS_RUNNING: i32 = 196;
pub const VIX_PROPERTY_VM_SUPPORTED_FEATURES: i32 = 197;
pub const VIX_PROPERTY_VM_IS_RECORDING: i32 = 236;
pub const VIX_PROPERTY_VM_IS_REPLAYING: i32 = 237;

// Job result property ids
pub const VIX_PROPERTY_JOB_RESULT_ERROR_CODE: i32 = 3000;
pub const VIX_PROPERTY_JOB_RESULT_VM_IN_GROUP: i32 = 3001;
pub const VIX_PROPERTY_JOB_RESULT_USER_MESSAGE: i32 = 3002;
pub const VIX_PROPERTY_JOB_RESULT_EXIT_CODE: i32 = 3004;
pub const VIX_PROPERTY_JOB_RESULT_COMMAND_OUTPUT: i32 = 3005;
pub const VIX_PROPERTY_JOB_RESULT_HANDLE: i32 = 3010;
pub const VIX_PROPERTY_JOB_RESULT_GUEST_OBJECT_EXISTS: i32 = 3011;
pub const VIX_PROPERTY_JOB_RESULT_GUEST_PROGRAM_ELAPSED_TIME: i32 = 3017;
pub const VIX_PROPERTY_JOB_RESULT_GUEST_PROGRAM_EXIT_CODE: i32 = 3018;
pub const VIX_PROPERTY_JOB_RESULT_ITEM_NAME: i32 = 3035;
pub const VIX_PROPERTY_JOB_RESULT_FOUND_ITEM_DESCRIPTION: i32 = 3036;
pub const VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_COUNT: i32 = 3046;
pub const VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_HOST: i32 = 3048;
pub const VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_FLAGS: i32 = 3049;
pub const VIX_PROPERTY_JOB_RESULT_PROCESS_ID: i32 = 3051;
pub const VIX_PROPERTY_JOB_RESULT_PROCESS_OWNER: i32 = 3052;
pub const VIX_PROPERTY_JOB_RESULT_PROCESS_COMMAND: i32 = 3053;
pub const VIX_PROPERTY_JOB_RESULT_FILE_FLAGS: i32 = 3054;
pub const VIX_PROPERTY_JOB_RESULT_PROCESS_START_TIME: i32 = 3055;
pub const VIX_PROPERTY_JOB_RESULT_VM_VARIABLE_STRING: i32 = 3056;
pub const VIX_PROPERTY_JOB_RESULT_PROCESS_BEING_DEBUGGED: i32 = 3057;
pub const VIX_PROPERTY_JOB_RESULT_SCREEN_IMAGE_SIZE: i32 = 3058;
pub const VIX_PROPERTY_JOB_RESULT_SCREEN_IMAGE_DATA: i32 = 3059;
pub const VIX_PROPERTY_JOB_RESULT_FILE_SIZE: i32 = 3061;
pub const VIX_PROPERTY_JOB_RESULT_FILE_MOD_TIME: i32 = 3062;

// Event property ids
pub const VIX_PROPERTY_FOUND_ITEM_LOCATION: i32 = 4010;

// Snapshot property ids
pub const VIX_PROPERTY_SNAPSHOT_DISPLAYNAME: i32 = 4200;
pub const VIX_PROPERTY_SNAPSHOT_DESCRIPTION: i32 = 4201;
pub const VIX_PROPERTY_SNAPSHOT_POWERSTATE: i32 = 4205;
pub const VIX_PROPERTY_SNAPSHOT_IS_REPLAYABLE: i32 = 4207;

// Guest property ids
pub const VIX_PROPERTY_GUEST_SHAREDFOLDERS_SHARES_PATH: i32 = 4525;

// VM encryption property ids
pub const VIX_PROPERTY_VM_ENCRYPTION_PASSWORD: i32 = 7001;

// Event types
pub const VIX_EVENTTYPE_JOB_COMPLETED: i32 = 2;
pub const VIX_EVENTTYPE_JOB_PROGRESS: i32 = 3;
pub const VIX_EVENTTYPE_FIND_ITEM: i32 = 8;
pub const VIX_EVENTTYPE_CALLBACK_SIGNALLED: i32 = 2;

// Guest file attributes
pub const VIX_FILE_ATTRIBUTES_DIRECTORY: i32 = 0x0001;
pub const VIX_FILE_ATTRIBUTES_SYMLINK: i32 = 0x0002;

// Host options
pub const VIX_HOSTOPTION_USE_EVENT_PUMP: i32 = 0x0008;

// Service providers
pub const VIX_SERVICEPROVIDER_DEFAULT: i32 = 1;
pub const VIX_SERVICEPROVIDER_VMWARE_SERVER: i32 = 2;
pub const VIX_SERVICEPROVIDER_VMWARE_WORKSTATION: i32 = 3;
pub const VIX_SERVICEPROVIDER_VMWARE_PLAYER: i32 = 4;
pub const VIX_SERVICEPROVIDER_VMWARE_VI_SERVER: i32 = 10;

// "Use the current API version" sentinel passed to the connect entry point.
pub const VIX_API_VERSION: i32 = -1;

// Find item types
pub const VIX_FIND_RUNNING_VMS: i32 = 1;
pub const VIX_FIND_REGISTERED_VMS: i32 = 4;

// VM open options
pub const VIX_VMOPEN_NORMAL: i32 = 0;

// Event pump options
pub const VIX_PUMPEVENTOPTION_NONE: i32 = 0;

// Power operation options
pub const VIX_VMPOWEROP_NORMAL: i32 = 0;
pub const VIX_VMPOWEROP_FROM_GUEST: i32 = 0x0004;
pub const VIX_VMPOWEROP_SUPPRESS_SNAPSHOT_POWERON: i32 = 0x0080;
pub const VIX_VMPOWEROP_LAUNCH_GUI: i32 = 0x0200;
pub const VIX_VMPOWEROP_START_VM_PAUSED: i32 = 0x1000;

// Delete options
pub const VIX_VMDELETE_DISK_FILES: i32 = 0x0002;

// Power states
pub const VIX_POWERSTATE_POWERING_OFF: i32 = 0x0001;
pub const VIX_POWERSTATE_POWERED_OFF: i32 = 0x0002;
pub const VIX_POWERSTATE_POWERING_ON: i32 = 0x0004;
pub const VIX_POWERSTATE_POWERED_ON: i32 = 0x0008;
pub const VIX_POWERSTATE_SUSPENDING: i32 = 0x000C;
pub const VIX_POWERSTATE_SUSPENDED: i32 = 0x0010;
pub const VIX_POWERSTATE_TOOLS_RUNNING: i32 = 0x0020;
pub const VIX_POWERSTATE_RESETTING: i32 = 0x0040;
pub const VIX_POWERSTATE_BLOCKED_ON_MSG: i32 = 0x0080;
pub const VIX_POWERSTATE_PAUSED: i32 = 0x0100;
pub const VIX_POWERSTATE_RESUMING: i32 = 0x0800;

// Tools states
pub const VIX_TOOLSSTATE_UNKNOWN: i32 = 0x0001;
pub const VIX_TOOLSSTATE_RUNNING: i32 = 0x0002;
pub const VIX_TOOLSSTATE_NOT_INSTALLED: i32 = 0x0004;

// VM supported feature flags
pub const VIX_VM_SUPPORT_SHARED_FOLDERS: i32 = 0x0001;
pub const VIX_VM_SUPPORT_MULTIPLE_SNAPSHOTS: i32 = 0x0002;
pub const VIX_VM_SUPPORT_TOOLS_INSTALL: i32 = 0x0004;
pub const VIX_VM_SUPPORT_HARDWARE_UPGRADE: i32 = 0x0008;

// Guest login options
pub const VIX_LOGIN_IN_GUEST_REQUIRE_INTERACTIVE_ENVIRONMENT: i32 = 0x08;

// Guest program options
pub const VIX_RUNPROGRAM_RETURN_IMMEDIATELY: i32 = 0x0001;
pub const VIX_RUNPROGRAM_ACTIVATE_WINDOW: i32 = 0x0002;

// Variable scopes
pub const VIX_VM_GUEST_VARIABLE: i32 = 1;
pub const VIX_VM_CONFIG_RUNTIME_ONLY: i32 = 2;
pub const VIX_GUEST_ENVIRONMENT_VARIABLE: i32 = 3;

// Snapshot options
pub const VIX_SNAPSHOT_REMOVE_CHILDREN: i32 = 0x0001;
pub const VIX_SNAPSHOT_INCLUDE_MEMORY: i32 = 0x0002;

// Shared folder options
pub const VIX_SHAREDFOLDER_WRITE_ACCESS: i32 = 0x04;

// Screen capture formats
pub const VIX_CAPTURESCREENFORMAT_PNG: i32 = 0x01;
pub const VIX_CAPTURESCREENFORMAT_PNG_NOCOMPRESS: i32 = 0x02;

// Clone types
pub const VIX_CLONETYPE_FULL: i32 = 0;
pub const VIX_CLONETYPE_LINKED: i32 = 1;

// Tools installer options
pub const VIX_INSTALLTOOLS_MOUNT_TOOLS_INSTALLER: i32 = 0x00;
pub const VIX_INSTALLTOOLS_AUTO_UPGRADE: i32 = 0x01;
pub const VIX_INSTALLTOOLS_RETURN_IMMEDIATELY: i32 = 0x02;
