use assert_cmd::Command;
use predicates::str::contains;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("codegalaxy-cli").unwrap();
    cmd.env_remove("CODEGALAXY_DB_PATH")
        .env_remove("CODEGALAXY_USER_ID");
    cmd
}

#[test]
fn ping_prints_core_probe() {
    cli()
        .arg("ping")
        .assert()
        .success()
        .stdout(contains("ping=pong"))
        .stdout(contains("version="));
}

#[test]
fn seed_then_clear_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cli.sqlite3");
    let db_arg = db_path.to_str().unwrap();

    cli()
        .args(["init-db", "--db-path", db_arg])
        .assert()
        .success()
        .stdout(contains("database ready"));

    cli()
        .args(["seed-demo", "--db-path", db_arg])
        .assert()
        .success()
        .stdout(contains("seeded 6 tasks, 4 events, 2 galaxy objects"));

    cli()
        .args(["seed-demo", "--db-path", db_arg])
        .assert()
        .success()
        .stdout(contains("nothing seeded"));

    cli()
        .args(["clear-tasks", "--db-path", db_arg])
        .assert()
        .success()
        .stdout(contains("deleted 6 tasks"));
}

#[test]
fn unknown_subcommand_fails() {
    cli().arg("launch").assert().failure();
}
