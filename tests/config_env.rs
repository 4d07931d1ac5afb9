use smetl::ChannelTarget;
use std::time::Duration;

// Integration tests run in their own process, so mutating the environment
// here cannot race with the other test binaries. Tests within this file
// still share a process; keep them in one function.
#[test]
fn channel_target_from_env() {
    // Missing channel is a hard error with a pointer to the variable.
    std::env::remove_var("TELEGRAM_CHANNEL");
    std::env::remove_var("SMETL_PAGE_SIZE");
    let err = ChannelTarget::from_env().unwrap_err();
    assert!(format!("{:#}", err).contains("TELEGRAM_CHANNEL"));

    // Channel alone: defaults apply (page size 200, 1s pacing).
    std::env::set_var("TELEGRAM_CHANNEL", "smu_confess");
    let target = ChannelTarget::from_env().unwrap();
    assert_eq!(target.channel, "smu_confess");
    assert_eq!(target.page_size, None);
    let opts = target.options();
    assert_eq!(opts.page_size, 200);
    assert_eq!(opts.page_delay, Duration::from_secs(1));

    // Page-size override flows into the options.
    std::env::set_var("SMETL_PAGE_SIZE", "50");
    let target = ChannelTarget::from_env().unwrap();
    assert_eq!(target.page_size, Some(50));
    assert_eq!(target.options().page_size, 50);

    // Garbage page size is rejected rather than silently defaulted.
    std::env::set_var("SMETL_PAGE_SIZE", "many");
    assert!(ChannelTarget::from_env().is_err());
}
