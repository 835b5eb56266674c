//! Launch sequence tests with mocked host services

mod common;

use std::net::Ipv4Addr;

use common::*;
use devserver::{DevServerError, LaunchConfig, LaunchOutcome};

#[tokio::test]
async fn test_busy_port_skips_server_and_browser() {
    let launcher = LauncherBuilder::new()
        .with_candidates(vec![Ipv4Addr::new(192, 168, 0, 12)])
        .with_port_available(false)
        .with_site(|site| {
            site.expect_start().times(0);
        })
        .with_browser(|browser| {
            browser.expect_open().times(0);
        })
        .build();

    let (result, output) = launch_captured(&launcher).await;

    match result.unwrap() {
        LaunchOutcome::AlreadyRunning { url } => {
            assert_eq!(url.as_str(), "http://192.168.0.12:8000/index.html");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(output.contains("Port 8000 is already in use"));
    assert!(output.contains("http://192.168.0.12:8000/index.html"));
}

#[tokio::test]
async fn test_free_port_starts_site_and_opens_browser() {
    let launcher = LauncherBuilder::new()
        .with_candidates(vec![Ipv4Addr::new(10, 1, 2, 3)])
        .with_port_available(true)
        .with_site(|site| {
            site.expect_start()
                .withf(|port| *port == 8000)
                .times(1)
                .returning(|port| {
                    Ok(devserver::RunningSite::finished(
                        (Ipv4Addr::UNSPECIFIED, port).into(),
                    ))
                });
        })
        .with_browser(|browser| {
            browser
                .expect_open()
                .withf(|url| url.as_str() == "http://10.1.2.3:8000/index.html")
                .times(1)
                .returning(|_| Ok(()));
        })
        .build();

    let (result, output) = launch_captured(&launcher).await;

    assert!(matches!(result.unwrap(), LaunchOutcome::Served { .. }));
    assert!(output.contains("http://127.0.0.1:8000/index.html"));
    assert!(output.contains("http://10.1.2.3:8000/index.html"));
}

#[tokio::test]
async fn test_link_local_only_advertises_loopback() {
    let launcher = LauncherBuilder::new()
        .with_candidates(vec![Ipv4Addr::new(169, 254, 10, 10)])
        .with_port_available(false)
        .build();

    let (result, _) = launch_captured(&launcher).await;

    match result.unwrap() {
        LaunchOutcome::AlreadyRunning { url } => {
            assert_eq!(url.host_str(), Some("127.0.0.1"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_detection_failure_advertises_loopback() {
    let launcher = LauncherBuilder::new()
        .with_inspector(|inspector| {
            inspector
                .expect_ipv4_candidates()
                .returning(|| Err(DevServerError::AddressDetection("network unreachable".to_string())));
        })
        .with_port_available(true)
        .with_site(site_started_once)
        .with_browser(|browser| {
            browser
                .expect_open()
                .withf(|url| url.host_str() == Some("127.0.0.1"))
                .times(1)
                .returning(|_| Ok(()));
        })
        .build();

    let (result, output) = launch_captured(&launcher).await;

    assert!(result.is_ok());
    assert!(!output.contains("network unreachable"));
}

#[tokio::test]
async fn test_no_browser_flag() {
    let config = LaunchConfig::new(9000, "web", "index.html", false).unwrap();
    let launcher = LauncherBuilder::new()
        .with_config(config)
        .with_candidates(vec![])
        .with_port_available(true)
        .with_site(site_started_once)
        .with_browser(|browser| {
            browser.expect_open().times(0);
        })
        .build();

    let (result, _) = launch_captured(&launcher).await;

    match result.unwrap() {
        LaunchOutcome::Served { url } => assert_eq!(url.as_str(), "http://127.0.0.1:9000/index.html"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_browser_failure_is_a_warning() {
    let launcher = LauncherBuilder::new()
        .with_candidates(vec![])
        .with_port_available(true)
        .with_site(site_started_once)
        .with_browser(|browser| {
            browser.expect_open().times(1).returning(|_| {
                Err(DevServerError::BrowserLaunch {
                    program: "xdg-open".to_string(),
                    message: "not found".to_string(),
                })
            });
        })
        .build();

    let (result, output) = launch_captured(&launcher).await;

    assert!(result.is_ok());
    assert!(output.contains("Could not open a browser"));
}

#[tokio::test]
async fn test_bind_failure_after_check_is_an_error() {
    let launcher = LauncherBuilder::new()
        .with_candidates(vec![])
        .with_port_available(true)
        .with_site(|site| {
            site.expect_start()
                .times(1)
                .returning(|port| Err(DevServerError::startup(format!("0.0.0.0:{port}"), "address in use")));
        })
        .with_browser(|browser| {
            browser.expect_open().times(0);
        })
        .build();

    let (result, _) = launch_captured(&launcher).await;

    assert!(matches!(result, Err(DevServerError::ServerStartupFailed { .. })));
}
