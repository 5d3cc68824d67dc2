use std::collections::VecDeque;

use redbot_core::{
    config::Config,
    decision::{LastDirection, LostLinePolicy},
    diagnostics::DiagnosticFormat,
    motion::{DutyCycle, Motion, MotionTable, Polarity, PolarityOutput},
    pwm::CompareOutputs,
    runtime::{Event, SharedState},
    sensors::{AdcRead, LineSensors, SensorChannels, SensorReading},
    Robot,
};

const CHANNELS: SensorChannels = SensorChannels {
    left: 0,
    middle: 1,
    right: 2,
};

/// Serves one scripted reading per left/middle/right sweep.
struct ScriptedAdc {
    script: VecDeque<SensorReading>,
    current: SensorReading,
}

impl ScriptedAdc {
    fn new(readings: &[(u16, u16, u16)]) -> Self {
        Self {
            script: readings
                .iter()
                .map(|&(l, m, r)| SensorReading::new(l, m, r))
                .collect(),
            current: SensorReading::default(),
        }
    }
}

impl AdcRead for ScriptedAdc {
    fn read_channel(&mut self, ch: u8) -> u16 {
        match ch {
            0 => {
                self.current = self.script.pop_front().expect("script exhausted");
                self.current.left
            }
            1 => self.current.middle,
            2 => self.current.right,
            _ => panic!("unexpected channel {ch}"),
        }
    }
}

#[derive(Default)]
struct Bridge {
    polarity: Option<Polarity>,
}

impl PolarityOutput for Bridge {
    fn set_polarity(&mut self, polarity: Polarity) {
        self.polarity = Some(polarity);
    }
}

#[derive(Default)]
struct Compare {
    current: DutyCycle,
}

impl CompareOutputs for Compare {
    fn set_compare(&mut self, duty: DutyCycle) {
        self.current = duty;
    }
}

fn robot<'a>(
    shared: &'a SharedState,
    readings: &[(u16, u16, u16)],
    config: &Config,
) -> Robot<'a, ScriptedAdc, Bridge, String> {
    let sensors = LineSensors::new(ScriptedAdc::new(readings), CHANNELS);
    Robot::new(
        sensors,
        Bridge::default(),
        &shared.duty,
        String::new(),
        config,
    )
}

#[test]
fn start_goes_straight() {
    let shared = SharedState::new();
    let mut robot = robot(&shared, &[], &Config::default());

    robot.start();

    assert_eq!(robot.duty(), DutyCycle::new(86, 130));
    assert_eq!(robot.actuator().pins().polarity, Some(Polarity::Forward));
}

#[test]
fn centered_line_drives_straight() {
    let shared = SharedState::new();
    let mut robot = robot(&shared, &[(200, 800, 200)], &Config::default());

    assert_eq!(robot.step(), Some(Motion::Straight));
    assert_eq!(robot.duty(), DutyCycle::new(86, 130));
    assert_eq!(robot.last_direction(), LastDirection::None);
    assert_eq!(robot.diagnostics().as_str(), "200    800    200\r\n");
}

#[test]
fn left_and_middle_on_bias_right() {
    let shared = SharedState::new();
    let mut robot = robot(&shared, &[(900, 900, 200)], &Config::default());

    assert_eq!(robot.step(), Some(Motion::SlowRight));
    assert_eq!(robot.duty(), DutyCycle::new(32, 105));
    assert_eq!(robot.last_direction(), LastDirection::Right);
}

#[test]
fn lost_line_turns_back_toward_last_side() {
    let shared = SharedState::new();
    let mut robot = robot(
        &shared,
        &[(900, 900, 200), (200, 200, 200)],
        &Config::default(),
    );

    robot.step();
    assert_eq!(robot.step(), Some(Motion::Right));
    assert_eq!(robot.duty(), DutyCycle::new(19, 130));
    assert_eq!(robot.last_direction(), LastDirection::Right);
}

#[test]
fn lost_line_at_startup_holds_previous_command() {
    let shared = SharedState::new();
    let mut robot = robot(&shared, &[(100, 100, 100)], &Config::default());

    robot.start();
    assert_eq!(robot.step(), None);
    assert_eq!(robot.duty(), DutyCycle::new(86, 130));
    assert_eq!(robot.actuator().pins().polarity, Some(Polarity::Forward));
    assert_eq!(robot.diagnostics().as_str(), "100    100    100\r\n");
}

#[test]
fn lost_line_at_startup_can_stop() {
    let shared = SharedState::new();
    let config = Config::default().with_lost_line(LostLinePolicy::Stop);
    let mut robot = robot(&shared, &[(100, 100, 100)], &config);

    robot.start();
    assert_eq!(robot.step(), Some(Motion::Stop));
    assert_eq!(robot.duty(), DutyCycle::ZERO);
    assert_eq!(robot.actuator().pins().polarity, Some(Polarity::Off));
}

#[test]
fn memory_survives_straight_and_all_on_stretches() {
    let shared = SharedState::new();
    let mut robot = robot(
        &shared,
        &[
            (200, 200, 900),
            (200, 800, 200),
            (900, 900, 900),
            (200, 800, 200),
            (0, 0, 0),
        ],
        &Config::default(),
    );

    let motions: Vec<_> = (0..5).map(|_| robot.step()).collect();
    assert_eq!(
        motions,
        vec![
            Some(Motion::Left),
            Some(Motion::Straight),
            Some(Motion::Straight),
            Some(Motion::Straight),
            Some(Motion::Left),
        ]
    );
    assert_eq!(robot.last_direction(), LastDirection::Left);
}

#[test]
fn pwm_interrupt_picks_up_each_iteration() {
    let shared = SharedState::new();
    let readings = [
        (200, 800, 200),
        (900, 200, 200),
        (200, 900, 900),
        (200, 200, 200),
    ];
    let expected = [
        DutyCycle::new(86, 130),
        DutyCycle::new(19, 130),
        DutyCycle::new(99, 35),
        DutyCycle::new(119, 20),
    ];
    let mut robot = robot(&shared, &readings, &Config::default());
    let mut compare = Compare::default();

    for duty in expected {
        robot.step();
        shared.dispatch(Event::Tick, &mut compare);
        shared.dispatch(Event::PwmRefresh, &mut compare);
        assert_eq!(compare.current, duty);
    }
}

#[test]
fn verbose_diagnostics_accumulate_one_line_per_step() {
    let shared = SharedState::new();
    let config = Config::default().with_diagnostics(DiagnosticFormat::Verbose);
    let mut robot = robot(&shared, &[(200, 800, 200), (50, 60, 70)], &config);

    robot.step();
    robot.step();

    assert_eq!(
        robot.diagnostics().as_str(),
        "200    800    200    straight\r\n50    60    70    hold\r\n"
    );
}

#[test]
fn lower_threshold_sees_a_faint_line() {
    let faint = (200, 580, 200);

    let shared = SharedState::new();
    let mut stock = robot(&shared, &[faint], &Config::default());
    assert_eq!(stock.step(), None);

    let shared = SharedState::new();
    let config = Config::default().with_threshold(550);
    let mut tuned = robot(&shared, &[faint], &config);
    assert_eq!(tuned.step(), Some(Motion::Straight));
    assert_eq!(tuned.reading(), SensorReading::new(200, 580, 200));
    assert_eq!(tuned.duty(), DutyCycle::new(86, 130));
}

#[test]
fn custom_motion_table_drives_committed_duty() {
    let table = MotionTable {
        straight: DutyCycle::new(100, 100),
        right: DutyCycle::new(10, 200),
        ..MotionTable::default()
    };
    let config = Config::default().with_motions(table);

    let shared = SharedState::new();
    let mut robot = robot(&shared, &[(200, 800, 200), (900, 200, 200)], &config);
    assert_eq!(robot.actuator().table(), &table);

    let mut compare = Compare::default();

    robot.step();
    shared.on_pwm_refresh(&mut compare);
    assert_eq!(compare.current, DutyCycle::new(100, 100));

    robot.step();
    shared.on_pwm_refresh(&mut compare);
    assert_eq!(compare.current, DutyCycle::new(10, 200));
}
