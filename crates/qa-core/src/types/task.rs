use crate::errors::QaError;

qa_enum! {
    /// Coarse processing stage of the reconstruction pipeline.
    Task, kind = "task" {
        Raw => "RAW",
        Sim => "SIM",
        Rec => "REC",
        Esd => "ESD",
        Ana => "ANA",
    }
}

try_from_index!(Task, TaskOutOfRange);

qa_enum! {
    /// Fine-grained stage inside a [`Task`]. Each index belongs to exactly one task.
    TaskIndex, kind = "task index" {
        Raws => "Raws",
        Hits => "Hits",
        SDigits => "SDigits",
        Digits => "Digits",
        RecPoints => "RecPoints",
        TrackSegments => "TrackSegments",
        RecParticles => "RecParticles",
        Esds => "ESDs",
    }
}

try_from_index!(TaskIndex, TaskIndexOutOfRange);

impl Task {
    /// Task indices owned by this task, in declaration order.
    pub fn indices(self) -> &'static [TaskIndex] {
        match self {
            Self::Raw => &[TaskIndex::Raws],
            Self::Sim => &[TaskIndex::Hits, TaskIndex::SDigits, TaskIndex::Digits],
            Self::Rec => &[
                TaskIndex::RecPoints,
                TaskIndex::TrackSegments,
                TaskIndex::RecParticles,
            ],
            Self::Esd => &[TaskIndex::Esds],
            Self::Ana => &[],
        }
    }
}

impl TaskIndex {
    /// The task this index belongs to.
    pub const fn task(self) -> Task {
        match self {
            Self::Raws => Task::Raw,
            Self::Hits | Self::SDigits | Self::Digits => Task::Sim,
            Self::RecPoints | Self::TrackSegments | Self::RecParticles => Task::Rec,
            Self::Esds => Task::Esd,
        }
    }

    /// Position of this index among its task's indices.
    pub fn position(self) -> usize {
        self.task()
            .indices()
            .iter()
            .position(|&i| i == self)
            .unwrap_or_default()
    }

    /// Check that this index belongs to `task`.
    pub fn ensure_task(self, task: Task) -> Result<Self, QaError> {
        if self.task() == task {
            Ok(self)
        } else {
            Err(QaError::TaskMismatch {
                index: self.name().to_string(),
                expected: self.task().name().to_string(),
                given: task.name().to_string(),
            })
        }
    }
}
