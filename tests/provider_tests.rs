// sysact_core/tests/provider_tests.rs
// Provider behavior against real files and a fixed OS context

#![cfg(unix)]

use std::collections::HashSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use sysact_core::{Action, Candidate, Completion, FixedContext, Request};
use tempfile::TempDir;

fn touch(dir: &Path, name: &str, mode: u32) {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
}

fn path_context(dirs: &[&Path]) -> FixedContext {
    let path = dirs
        .iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(":");
    FixedContext::new().with_env("PATH", &path)
}

fn value_set(completion: &Completion) -> HashSet<String> {
    completion.value_list().into_iter().map(String::from).collect()
}

#[test]
fn path_scan_filters_non_executables() {
    let bin = TempDir::new().unwrap();
    touch(bin.path(), "owner-exec", 0o744);
    touch(bin.path(), "group-exec", 0o650);
    touch(bin.path(), "other-exec", 0o601);
    touch(bin.path(), "readme", 0o644);
    fs::create_dir(bin.path().join("looks-like-a-binary")).unwrap();
    fs::set_permissions(
        bin.path().join("looks-like-a-binary"),
        fs::Permissions::from_mode(0o755),
    )
    .unwrap();

    let completion = Action::PathExecutables.invoke(&path_context(&[bin.path()]), &Request::default());

    let expected: HashSet<String> = ["owner-exec", "group-exec", "other-exec"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(value_set(&completion), expected);
    assert!(completion.candidates().iter().all(|c| c.description.is_empty()));
}

#[test]
fn path_scan_dedupes_repeated_directories() {
    let bin = TempDir::new().unwrap();
    touch(bin.path(), "tool", 0o755);

    let completion =
        Action::PathExecutables.invoke(&path_context(&[bin.path(), bin.path()]), &Request::default());
    assert_eq!(completion.value_list(), vec!["tool"]);
}

#[test]
fn path_scan_merges_directories_and_skips_missing() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    touch(first.path(), "nvim", 0o755);
    touch(second.path(), "nvim", 0o755);
    touch(second.path(), "chmod", 0o755);
    let missing = first.path().join("gone");

    let ctx = path_context(&[first.path(), &missing, second.path()]);
    let completion = Action::PathExecutables.invoke(&ctx, &Request::default());

    let expected: HashSet<String> = ["nvim", "chmod"].iter().map(|s| s.to_string()).collect();
    assert_eq!(value_set(&completion), expected);
    assert_eq!(completion.candidates().len(), 2);
}

#[test]
fn path_scan_ignores_symlinks() {
    let bin = TempDir::new().unwrap();
    touch(bin.path(), "python3", 0o755);
    std::os::unix::fs::symlink(bin.path().join("python3"), bin.path().join("python")).unwrap();

    let completion = Action::PathExecutables.invoke(&path_context(&[bin.path()]), &Request::default());
    assert_eq!(completion.value_list(), vec!["python3"]);
}

#[test]
fn users_from_database_file() {
    let dir = TempDir::new().unwrap();
    let passwd = dir.path().join("passwd");
    fs::write(
        &passwd,
        "root:x:0:0:root:/root:/bin/bash\nbin:x:1:1:bin:/bin:/sbin/nologin\n",
    )
    .unwrap();

    let completion = Action::Users(passwd).invoke(&FixedContext::new(), &Request::default());
    assert_eq!(
        completion,
        Completion::Candidates(vec![
            Candidate::described("root", "0"),
            Candidate::described("bin", "1"),
        ])
    );
}

#[test]
fn user_group_walks_both_databases() {
    let dir = TempDir::new().unwrap();
    let passwd = dir.path().join("passwd");
    let group = dir.path().join("group");
    fs::write(&passwd, "bin:x:1:1::/:/sbin/nologin\nlp:x:7:7::/:/sbin/nologin\n").unwrap();
    fs::write(&group, "audio:x:29:\nlist:x:38:\n").unwrap();

    let action = Action::user_group_from(Action::Users(passwd), Action::Groups(group));
    let ctx = FixedContext::new();

    let users = action.invoke(&ctx, &Request::current("b"));
    assert_eq!(users.value_list(), vec!["bin:", "lp:"]);
    assert_eq!(users.candidates()[0].description, "1");

    let groups = action.invoke(&ctx, &Request::current("lp:"));
    assert_eq!(
        groups.candidates(),
        &[Candidate::described("audio", "29"), Candidate::described("list", "38")]
    );

    assert_eq!(action.invoke(&ctx, &Request::current("lp:list:")), Completion::empty());
}

#[test]
fn user_group_with_missing_databases_is_empty() {
    let dir = TempDir::new().unwrap();
    let action = Action::user_group_from(
        Action::Users(dir.path().join("passwd")),
        Action::Groups(dir.path().join("group")),
    );
    let completion = action.invoke(&FixedContext::new(), &Request::current(""));
    assert_eq!(completion, Completion::empty());
}

#[test]
fn real_command_through_system_context() {
    let dir = TempDir::new().unwrap();
    let shells = dir.path().join("shells");
    fs::write(&shells, "# comment lines are kept\n/bin/bash\n/bin/zsh\n").unwrap();

    let action = Action::command("cat", [shells.display().to_string()]);
    let completion = action.invoke(&sysact_core::SystemContext::default(), &Request::default());
    assert_eq!(
        completion.value_list(),
        vec!["# comment lines are kept", "/bin/bash", "/bin/zsh"]
    );
}

#[test]
fn missing_command_through_system_context() {
    let action = Action::command("sysact-definitely-missing", Vec::<String>::new());
    let completion = action.invoke(&sysact_core::SystemContext::default(), &Request::default());
    assert!(completion.is_message());
}
