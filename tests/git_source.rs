use gcredits::git::GitRepo;
use gcredits::model::CommitRecord;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

fn commit_all(dir: &Path, author: &str) {
    git(dir, &["add", "-A"]);
    assert!(Command::new("git")
        .args(["commit", "-m", &format!("work by {author}")])
        .env("GIT_AUTHOR_NAME", author)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn write(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn by_author<'a>(commits: &'a [CommitRecord], author: &str) -> &'a CommitRecord {
    commits.iter().find(|c| c.author == author).unwrap()
}

fn history(dir: &Path) -> Vec<CommitRecord> {
    let repo = GitRepo::open(dir).unwrap();
    let range = repo.resolve_range("HEAD").unwrap();
    repo.collect_commits(&range, false).unwrap()
}

#[test]
fn new_directories_are_not_listed_as_files() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    write(dir.path(), "README", "hello\n");
    commit_all(dir.path(), "Ada");
    write(dir.path(), "blender/extern/foo.c", "int foo;\n");
    commit_all(dir.path(), "Bo");

    let commits = history(dir.path());
    assert_eq!(commits.len(), 2);
    assert_eq!(by_author(&commits, "Ada").files, vec!["README".to_string()]);
    assert_eq!(by_author(&commits, "Bo").files, vec!["blender/extern/foo.c".to_string()]);
}

#[test]
fn nested_edits_list_only_the_file() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    write(dir.path(), "src/deep/tree/a.c", "one\n");
    commit_all(dir.path(), "Ada");
    write(dir.path(), "src/deep/tree/a.c", "two\n");
    commit_all(dir.path(), "Bo");

    let commits = history(dir.path());
    assert_eq!(by_author(&commits, "Ada").files, vec!["src/deep/tree/a.c".to_string()]);
    assert_eq!(by_author(&commits, "Bo").files, vec!["src/deep/tree/a.c".to_string()]);
}

#[test]
fn renamed_file_is_listed_under_its_new_path() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    write(
        dir.path(),
        "extern/lib/util.c",
        "int util(void) {\n    return 42;\n}\n",
    );
    commit_all(dir.path(), "Ada");
    fs::create_dir_all(dir.path().join("src")).unwrap();
    git(dir.path(), &["mv", "extern/lib/util.c", "src/util.c"]);
    commit_all(dir.path(), "Bo");

    let commits = history(dir.path());
    assert_eq!(by_author(&commits, "Bo").files, vec!["src/util.c".to_string()]);
}
