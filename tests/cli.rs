use assert_cmd::Command;
use predicates::prelude::*;

fn calculator() -> Command {
    Command::cargo_bin("mruv_calculator").expect("mruv_calculator bin")
}

#[test]
fn acceleration_session_over_stdin() {
    calculator()
        .write_stdin("1\n0\n20\n5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("SIMULADOR DE MRUV"))
        .stdout(predicate::str::contains("Resultado: a = 4.00 m/s²"))
        .stdout(predicate::str::contains("Encerrando o simulador..."));
}

#[test]
fn table_session_prints_every_row() {
    let assert = calculator()
        .write_stdin("5\n0\n1\n10\n0\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout");
    assert!(stdout.contains("Tempo (s) | Posição (m) | Velocidade (m/s)"));
    for i in 0..=10 {
        let t = i as f64;
        let row = format!("{:>9.2} | {:>11.2} | {:>16.2}", t, 0.5 * t * t, t);
        assert!(stdout.contains(&row), "missing row {row:?}\n{stdout}");
    }
}

#[test]
fn bad_input_never_crashes_the_shell() {
    calculator()
        .write_stdin("7\nx\n2\nabc\n3\n1\n1\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exemplo inválido."))
        .stdout(predicate::str::contains("Ocorreu um erro"))
        .stdout(predicate::str::contains("Erro: A aceleração não pode ser zero!"));
}

#[test]
fn closed_stdin_exits_normally() {
    calculator()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encerrando o simulador..."));
}

#[test]
fn quiz_session_over_stdin() {
    calculator()
        .write_stdin("9\n3\n1\n3\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Tente novamente!"))
        .stdout(predicate::str::contains("✅ Resposta correta!"))
        .stdout(predicate::str::contains("Quiz concluído!"));
}

#[test]
fn undecodable_stdin_is_not_fatal() {
    calculator()
        .write_stdin(&b"1\n\xff\xfe\n1\n0\n20\n5\n0\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ocorreu um erro"))
        .stdout(predicate::str::contains("Resultado: a = 4.00 m/s²"));
}

#[test]
fn headless_plot_reports_and_continues() {
    calculator()
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .write_stdin("6\n0\n1\n5\n6\n0\n2\n5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Abrindo gráfico").count(2))
        .stdout(predicate::str::contains("Ocorreu um erro: nenhum display").count(2));
}
