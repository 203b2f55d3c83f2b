use async_trait::async_trait;
use rand::Rng;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::output::OutputEvent;
use crate::playback::{ms, PlaybackSequence};

pub struct PingCommand;

const PACKETS: usize = 4;

fn summary(target: &str) -> String {
    format!(
        "\n--- {} ping statistics ---\n\
         {} packets transmitted, {} received, 0% packet loss\n\
         round-trip min/avg/max/stddev = 15.2/28.7/45.1/12.4 ms",
        target, PACKETS, PACKETS
    )
}

#[async_trait]
impl Command for PingCommand {
    fn name(&self) -> &'static str {
        "ping"
    }
    fn description(&self) -> &'static str {
        "Send ICMP packets (simulated)"
    }
    fn usage(&self) -> &'static str {
        "ping [host]"
    }

    async fn execute(&self, mut ctx: CommandContext) -> CommandResult {
        let times: Vec<f64> = (0..PACKETS).map(|_| ctx.rng.gen_range(10.0..60.0)).collect();
        let target = ctx.arg_or("google.com");

        let seq = PlaybackSequence::new("ping").every(ms(1000), PACKETS, |i| {
            let mut events = vec![OutputEvent::success(format!(
                "64 bytes from {}: icmp_seq={} ttl=117 time={:.1} ms",
                target,
                i + 1,
                times[i]
            ))];
            if i + 1 == PACKETS {
                events.push(OutputEvent::info(summary(target)));
            }
            events
        });

        CommandResult::event(OutputEvent::info(format!(
            "PING {} (172.217.16.142) 56(84) bytes of data.",
            target
        )))
        .with_playback(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_util::{lines, make_ctx};
    use crate::output::Style;

    #[tokio::test]
    async fn test_ping_four_replies_then_summary() {
        let result = PingCommand.execute(make_ctx(vec!["example.org"])).await;
        assert_eq!(
            lines(&result.output)[0].0,
            "PING example.org (172.217.16.142) 56(84) bytes of data."
        );

        let seq = result.playback.unwrap();
        assert_eq!(seq.len(), 5);
        let offsets: Vec<_> = seq.steps().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![ms(1000), ms(2000), ms(3000), ms(4000), ms(4000)]);

        let events: Vec<OutputEvent> = seq.steps().iter().map(|s| s.event.clone()).collect();
        let out = lines(&events);
        for (i, (text, style)) in out.iter().take(4).enumerate() {
            assert_eq!(*style, Style::Success);
            let prefix = format!("64 bytes from example.org: icmp_seq={} ttl=117 time=", i + 1);
            assert!(text.starts_with(&prefix), "{}", text);
            let time: f64 = text[prefix.len()..].trim_end_matches(" ms").parse().unwrap();
            assert!((10.0..=60.0).contains(&time));
        }
        assert_eq!(out[4].1, Style::Info);
        assert!(out[4].0.contains("--- example.org ping statistics ---"));
    }

    #[tokio::test]
    async fn test_ping_same_seed_same_times() {
        let a = PingCommand.execute(make_ctx(vec![])).await.playback.unwrap();
        let b = PingCommand.execute(make_ctx(vec![])).await.playback.unwrap();
        assert_eq!(a, b);
    }
}
