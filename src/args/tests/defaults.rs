use super::*;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["subcast"])?;

    let expected_no_color = std::env::var("NO_COLOR")
        .ok()
        .and_then(|value| parse_bool_env(&value).ok())
        .unwrap_or(false);

    let checks = [
        (args.command.is_none(), "Expected no subcommand"),
        (
            args.bind == SocketAddr::from(([0, 0, 0, 0], 5555)),
            "Unexpected bind",
        ),
        (args.capacity.get() == 100, "Unexpected capacity"),
        (args.max_lines.get() == 3, "Unexpected max_lines"),
        (args.tail.get() == 10, "Unexpected tail"),
        (args.width.is_none(), "Expected width to be None"),
        (
            args.fade_in == Duration::from_millis(250),
            "Unexpected fade_in",
        ),
        (
            args.hide_after == Duration::from_secs(5),
            "Unexpected hide_after",
        ),
        (
            args.fade_out == Duration::from_millis(500),
            "Unexpected fade_out",
        ),
        (
            args.frame_interval == Duration::from_millis(33),
            "Unexpected frame_interval",
        ),
        (!args.no_ui, "Expected no_ui to be false"),
        (args.no_color == expected_no_color, "Unexpected no_color"),
        (!args.verbose, "Expected verbose to be false"),
        (args.config.is_none(), "Expected config to be None"),
        (args.log_file.is_none(), "Expected log_file to be None"),
    ];

    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn duration_parser_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("5", Duration::from_secs(5)),
        ("5s", Duration::from_secs(5)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3_600)),
        (" 10ms ", Duration::from_millis(10)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Parsed {:?} as {:?}",
                input, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn duration_parser_rejects_bad_input() -> AppResult<()> {
    for input in ["", "ms", "0s", "5d", "12x", "99999999999999999999s"] {
        if parse_duration_arg(input).is_ok() {
            return Err(AppError::validation(format!(
                "Expected {:?} to be rejected",
                input
            )));
        }
    }
    Ok(())
}

#[test]
fn bool_env_parser() -> AppResult<()> {
    let truthy = ["1", "true", "YES", "on"];
    let falsy = ["0", "false", "No", "off", ""];
    for value in truthy {
        if !parse_bool_env(value)? {
            return Err(AppError::validation(format!("{:?} should be true", value)));
        }
    }
    for value in falsy {
        if parse_bool_env(value)? {
            return Err(AppError::validation(format!("{:?} should be false", value)));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("Expected 'maybe' to be rejected"));
    }
    Ok(())
}
