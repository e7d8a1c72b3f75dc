use serde::Serialize;

use super::Policy;

/// Human-readable description of a policy, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
}

static FCFS: PolicyInfo = PolicyInfo {
    name: "First-Come, First-Served (FCFS)",
    description: "Processes run in the order they arrive. The first process to request the CPU \
                  holds it until it finishes.",
    advantages: &[
        "Simple to understand and implement",
        "No starvation: every process eventually runs",
        "Fair with respect to arrival order",
    ],
    disadvantages: &[
        "Convoy effect: short processes wait behind long ones",
        "High average waiting time",
        "Non-preemptive, with no notion of urgency",
    ],
};

static SJF: PolicyInfo = PolicyInfo {
    name: "Shortest Job First (SJF)",
    description: "Picks the ready process with the smallest burst time and runs it to \
                  completion before choosing again.",
    advantages: &[
        "Optimal average waiting time among non-preemptive policies",
        "Lower average turnaround time",
        "Well suited to batch workloads",
    ],
    disadvantages: &[
        "Long processes can starve",
        "Burst times must be known in advance",
        "Poor fit for interactive systems",
    ],
};

static SRTF: PolicyInfo = PolicyInfo {
    name: "Shortest Remaining Time First (SRTF)",
    description: "Preemptive SJF. The process with the least remaining work always holds the \
                  CPU, so a shorter arrival preempts the running process.",
    advantages: &[
        "Optimal average waiting time",
        "Better response time than SJF",
        "Keeps the CPU busy whenever work is ready",
    ],
    disadvantages: &[
        "Frequent context switches",
        "Long processes can starve",
        "Remaining time must be tracked continuously",
    ],
};

static ROUND_ROBIN: PolicyInfo = PolicyInfo {
    name: "Round Robin (RR)",
    description: "Each dispatch grants at most one time quantum. A process that still has work \
                  left goes to the back of the ready queue.",
    advantages: &[
        "Every process gets an equal share of the CPU",
        "Good response time for short processes",
        "No starvation",
    ],
    disadvantages: &[
        "Behaviour depends heavily on the quantum",
        "Higher average waiting time than SJF",
        "Context switch overhead",
    ],
};

static PRIORITY_NP: PolicyInfo = PolicyInfo {
    name: "Priority Scheduling (Non-Preemptive)",
    description: "Picks the ready process with the most urgent priority (lowest number). Once \
                  started, it runs to completion.",
    advantages: &[
        "Important processes run first",
        "Suits systems with explicit urgency levels",
        "Priorities can be assigned freely",
    ],
    disadvantages: &[
        "Low-priority processes can starve",
        "Prone to priority inversion",
        "No response time guarantee",
    ],
};

static PRIORITY_P: PolicyInfo = PolicyInfo {
    name: "Priority Scheduling (Preemptive)",
    description: "Like the non-preemptive variant, but a more urgent arrival takes the CPU \
                  from the running process immediately.",
    advantages: &[
        "Immediate response for urgent processes",
        "Better fit for real-time workloads",
        "Urgency is honoured at every tick",
    ],
    disadvantages: &[
        "More context switches",
        "Low-priority processes can starve",
        "More complex to implement",
    ],
};

impl Policy {
    pub fn info(self) -> &'static PolicyInfo {
        match self {
            Policy::Fcfs => &FCFS,
            Policy::Sjf => &SJF,
            Policy::Srtf => &SRTF,
            Policy::RoundRobin => &ROUND_ROBIN,
            Policy::PriorityNonPreemptive => &PRIORITY_NP,
            Policy::PriorityPreemptive => &PRIORITY_P,
        }
    }

    /// Display name without the parenthesised abbreviation or the word
    /// "Scheduling", as used for chart labels.
    pub fn short_name(self) -> &'static str {
        let name = self.info().name;
        let name = name.split('(').next().unwrap_or(name).trim_end();
        name.strip_suffix(" Scheduling").unwrap_or(name)
    }
}
