use super::*;

#[test]
fn parse_send_subcommand() -> AppResult<()> {
    let args = parse_test_args([
        "subcast",
        "send",
        "--file",
        "movie.srt",
        "--target",
        "10.0.0.2:7000",
        "--interval",
        "200ms",
        "--grow",
    ])?;

    match args.command {
        Some(Command::Send(send)) => {
            if send.file != "movie.srt" {
                return Err(AppError::validation("Unexpected file"));
            }
            if send.target != SocketAddr::from(([10, 0, 0, 2], 7000)) {
                return Err(AppError::validation("Unexpected target"));
            }
            if send.interval != Duration::from_millis(200) {
                return Err(AppError::validation("Unexpected interval"));
            }
            if !send.grow {
                return Err(AppError::validation("Expected grow"));
            }
            Ok(())
        }
        None => Err(AppError::validation("Expected send subcommand")),
    }
}

#[test]
fn send_defaults() -> AppResult<()> {
    let args = parse_test_args(["subcast", "send", "-f", "cues.srt"])?;
    match args.command {
        Some(Command::Send(send)) => {
            if send.target != SocketAddr::from(([127, 0, 0, 1], 5555)) {
                return Err(AppError::validation("Unexpected default target"));
            }
            if send.interval != Duration::from_millis(500) || send.grow {
                return Err(AppError::validation("Unexpected send defaults"));
            }
            Ok(())
        }
        None => Err(AppError::validation("Expected send subcommand")),
    }
}

#[test]
fn send_requires_file() -> AppResult<()> {
    if parse_test_args(["subcast", "send"]).is_ok() {
        return Err(AppError::validation("Expected missing --file to fail"));
    }
    Ok(())
}
