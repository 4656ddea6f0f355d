use assert_fs::{TempDir, prelude::*};

/// Builds a fixture tree:
/// root/
///   a.cpp                 (packed)
///   CMakeLists.txt        (packed, special name)
///   Dockerfile            (packed, special name)
///   notes.log             (not a target extension)
///   src/util.h            (packed)
///   src/bad.txt           (invalid UTF-8, skipped)
///   logs/b.cpp            (pruned directory)
///   src/build/gen.cpp     (pruned at depth)
///   .git/config.yml       (pruned directory)
///   nested/project_context.txt (self-excluded)
pub fn basic_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("a.cpp").write_str("int main(){}").unwrap();
    td.child("CMakeLists.txt")
        .write_str("cmake_minimum_required(VERSION 3.20)\n")
        .unwrap();
    td.child("Dockerfile").write_str("FROM alpine\n").unwrap();
    td.child("notes.log").write_str("log line\n").unwrap();
    td.child("src/util.h").write_str("#pragma once\n").unwrap();
    td.child("src/bad.txt").write_binary(&[0xff, 0xfe, 0x00]).unwrap();
    td.child("logs/b.cpp").write_str("int b;\n").unwrap();
    td.child("src/build/gen.cpp").write_str("int gen;\n").unwrap();
    td.child(".git/config.yml").write_str("core: {}\n").unwrap();
    td.child("nested/project_context.txt")
        .write_str("stale output\n")
        .unwrap();
    td
}
