// Fixed packing rules. These never change during a run.

/// Name of the artifact written into the root directory.
pub const OUTPUT_FILE: &str = "project_context.txt";

/// Script name excluded from packing.
pub const PACKER_SCRIPT: &str = "packer.py";

/// First line of every artifact.
pub const INTRO_PROMPT: &str =
    "Below is the entire codebase context. Please analyze it based on the user's request.";

/// Filename suffixes that mark a file as packable. Plain `ends_with` match.
pub const TARGET_EXTENSIONS: &[&str] = &[
    ".cpp", ".c", ".cc", ".h", ".hpp", ".proto", ".sql", ".yaml", ".yml", ".txt", ".md",
    ".dockerfile",
];

/// Directory basenames pruned anywhere in the tree.
pub const IGNORE_DIRS: &[&str] = &[
    ".git",
    ".idea",
    "cmake-build-debug",
    "cmake-build-debug-",
    "cmake-build-release",
    "build",
    "out",
    "bin",
    "third_party",
    "vcpkg_installed",
    "external",
    ".vscode",
    ".venv",
    "__pycache__",
    "logs",
    "generated",
];

/// Bare filenames packed regardless of their extension.
pub const INCLUDE_FILES: &[&str] = &["CMakeLists.txt", "Dockerfile", "docker-compose.yml"];
