use assert_cmd::Command;
use std::path::Path;

pub fn diary_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("diary").unwrap();
    cmd.current_dir(cwd);
    cmd.env_remove("DIARY_DIRPATH");
    cmd.env_remove("DIARY_EDITOR");
    cmd.env_remove("DIARY_LOG");
    cmd
}
