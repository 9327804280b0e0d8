//! Native toolchain and binary location errors

impl_error_constructors! {
    tool_not_found => ToolNotFound(tool),
    command_failed => CommandFailed(command, status),
    binary_not_found => BinaryNotFound(platform),
    platform_not_supported => PlatformNotSupported(platform),
}
