use cpu_sched_model::*;

mod common;
use common::reference_set;

#[test]
fn test_fcfs_steps() {
    common::setup_test();
    let set = reference_set();
    let steps = project_steps(&set, Policy::Fcfs, None).unwrap();
    assert_eq!(steps.len(), 19);

    let t0 = &steps[0];
    assert_eq!(t0.current_time, 0);
    assert_eq!(t0.running.as_deref(), Some("P1"));
    assert!(t0.ready_queue.is_empty());
    assert_eq!(t0.timeline.len(), 1);

    assert_eq!(steps[1].ready_queue, ["P2"]);
    assert_eq!(steps[3].ready_queue, ["P2", "P3", "P4"]);

    // P1 completes at 5 and P2 takes over
    let t5 = &steps[5];
    assert_eq!(t5.running.as_deref(), Some("P2"));
    assert_eq!(t5.ready_queue, ["P3", "P4"]);
    assert_eq!(t5.timeline.len(), 2);

    let last = steps.last().unwrap();
    assert_eq!(last.current_time, 18);
    assert_eq!(last.running, None);
    assert!(last.ready_queue.is_empty());
    assert_eq!(last.timeline.len(), 4);
}

#[test]
fn test_steps_carry_final_metrics() {
    common::setup_test();
    let set = reference_set();
    let result = Policy::Srtf.run(&set, None).unwrap();
    for step in result.steps() {
        assert_eq!(step.metrics, result.metrics);
    }
}

#[test]
fn test_running_matches_covering_block() {
    common::setup_test();
    let set = reference_set();
    for result in compare(&set, Some(3)).unwrap() {
        let steps: Vec<_> = result.steps().collect();
        assert_eq!(steps.len() as Ticks, result.end_time() + 1, "{}", result.policy);

        for step in &steps {
            let t = step.current_time;
            let covering = result
                .timeline
                .iter()
                .find(|b| b.start_time <= t && t < b.end_time)
                .filter(|b| !b.is_idle());
            assert_eq!(step.running.as_deref(), covering.map(|b| b.name.as_str()));

            if let Some(running) = &step.running {
                assert!(!step.ready_queue.contains(running), "{}: t={t}", result.policy);
            }
            assert!(step.timeline.iter().all(|b| b.start_time <= t));
            assert_eq!(
                step.timeline.len(),
                result.timeline.iter().filter(|b| b.start_time <= t).count()
            );
        }
    }
}

#[test]
fn test_idle_steps() {
    common::setup_test();
    let set = ProcessSet::new(vec![
        Process::new("A", 2, 1, 1),
        Process::new("B", 2, 1, 1),
    ])
    .unwrap();
    let steps = project_steps(&set, Policy::RoundRobin, Some(1)).unwrap();
    assert_eq!(steps.len(), 5);

    assert_eq!(steps[0].running, None);
    assert!(steps[0].ready_queue.is_empty());
    assert_eq!(steps[0].timeline.len(), 1);
    assert_eq!(steps[2].running.as_deref(), Some("A"));
    assert_eq!(steps[2].ready_queue, ["B"]);
    assert_eq!(steps[3].running.as_deref(), Some("B"));
    assert!(steps[3].ready_queue.is_empty());
}

#[test]
fn test_steps_are_restartable() {
    common::setup_test();
    let set = reference_set();
    let result = Policy::RoundRobin.run(&set, Some(2)).unwrap();

    let mut steps = result.steps();
    assert_eq!(steps.len(), 19);
    steps.next();
    steps.next();
    let resumed = steps.clone();
    assert_eq!(steps.len(), 17);
    assert_eq!(resumed.collect::<Vec<_>>(), steps.collect::<Vec<_>>());

    let again: Vec<_> = result.steps().collect();
    assert_eq!(again, project_steps(&set, Policy::RoundRobin, Some(2)).unwrap());
    assert_eq!(result.steps().next_back().unwrap().current_time, 18);
}
