
use std::fs;
use std::net::UdpSocket;
use std::time::Duration;

use subcast::fragment::parse_fragment;
use tempfile::tempdir;

use support_overlay::run_subcast;

const SRT: &str = "1\n00:00:00,000 --> 00:00:02,000\nGood evening\n\n2\n00:00:02,500 --> 00:00:04,000\nWelcome back\n";

#[test]
fn e2e_send_replays_srt_file() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("cues.srt");
    fs::write(&path, SRT).map_err(|err| format!("write failed: {}", err))?;

    let receiver = UdpSocket::bind("127.0.0.1:0").map_err(|err| format!("bind failed: {}", err))?;
    receiver
        .set_read_timeout(Some(Duration::from_secs(5)))
        .map_err(|err| format!("set timeout failed: {}", err))?;
    let target = receiver
        .local_addr()
        .map_err(|err| format!("local addr failed: {}", err))?;

    let output = run_subcast([
        "send".to_owned(),
        "--file".to_owned(),
        path.to_string_lossy().into_owned(),
        "--target".to_owned(),
        target.to_string(),
        "--interval".to_owned(),
        "1ms".to_owned(),
        "--grow".to_owned(),
    ])?;
    if !output.status.success() {
        return Err(format!(
            "send failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let mut texts = Vec::new();
    let mut datagram = [0_u8; 2048];
    for _ in 0..4 {
        let (len, _) = receiver
            .recv_from(&mut datagram)
            .map_err(|err| format!("recv failed: {}", err))?;
        let raw = std::str::from_utf8(datagram.get(..len).unwrap_or_default())
            .map_err(|err| format!("invalid utf-8: {}", err))?;
        let fragment = parse_fragment(raw).map_err(|err| format!("parse failed: {}", err))?;
        texts.push(fragment.text);
    }

    if texts != ["Good", "Good evening", "Welcome", "Welcome back"] {
        return Err(format!("Unexpected datagrams: {:?}", texts));
    }
    Ok(())
}

#[test]
fn e2e_send_rejects_file_without_cues() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("empty.srt");
    fs::write(&path, "just some text\n").map_err(|err| format!("write failed: {}", err))?;

    let output = run_subcast([
        "send",
        "--file",
        path.to_string_lossy().as_ref(),
        "--target",
        "127.0.0.1:9",
    ])?;
    if output.status.success() {
        return Err("Expected send to fail without cues".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("NoCues") {
        return Err(format!("Unexpected stderr: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_rejects_unsupported_config_extension() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("subcast.yaml");
    fs::write(&path, "bind: nowhere\n").map_err(|err| format!("write failed: {}", err))?;

    let output = run_subcast(["--no-ui", "--config", path.to_string_lossy().as_ref()])?;
    if output.status.success() {
        return Err("Expected unsupported config to fail".to_owned());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("UnsupportedExtension") {
        return Err(format!("Unexpected stderr: {}", stderr));
    }
    Ok(())
}
