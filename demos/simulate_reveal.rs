use emblem_reveal::{
    Cascade, ElementKind, ElementLayout, HandleRegistry, Millis, Renderer, RevealConfig, Targets,
    Tween, TweenEngine,
};

struct PrintSurface {
    next: u32,
}

impl Renderer<u32> for PrintSurface {
    fn mount(&mut self, layout: &ElementLayout, sink: &mut HandleRegistry<u32>) {
        for p in &layout.primitives {
            self.next += 1;
            sink.attach(&p.path, self.next);
        }
        println!("mount   {:<14} {} primitives", layout.kind, layout.primitives.len());
    }

    fn unmount(&mut self, kind: ElementKind) {
        println!("unmount {kind}");
    }
}

#[derive(Default)]
struct LinearPlayer {
    clock: Millis,
    playing: Vec<(Millis, Tween)>,
}

impl TweenEngine<u32> for LinearPlayer {
    fn animate_from(&mut self, targets: Targets<u32>, tween: Tween) {
        println!(
            "tween   {:>2} target(s) {:.2}s +{:.2}s {}",
            targets.len(),
            tween.duration_s,
            tween.delay_s,
            tween.ease.name()
        );
        self.playing.push((self.clock, tween));
    }
}

impl LinearPlayer {
    fn tick(&mut self, now: Millis) {
        self.clock = now;
        for (started, tween) in &self.playing {
            if let Some(probe) = &tween.probe {
                let elapsed = now.since(*started) as f64 / 1000.0 - tween.delay_s;
                let progress = (elapsed / tween.duration_s).clamp(0.0, 1.0);
                if progress >= 1.0 {
                    probe.complete();
                } else {
                    probe.report(progress);
                }
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RevealConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => RevealConfig::default(),
    };
    let mut cascade = Cascade::new(config)?;
    let mut surface = PrintSurface { next: 0 };
    let mut player = LinearPlayer::default();

    cascade.start(Millis::ZERO)?;
    for t in (0..=3_000).step_by(16) {
        let now = Millis(t);
        player.tick(now);
        cascade.advance(now, &mut surface, &mut player)?;
    }
    cascade.teardown(&mut surface);

    println!("{}", serde_json::to_string_pretty(cascade.events())?);
    Ok(())
}
