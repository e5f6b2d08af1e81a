/// Straight line between two points in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl Segment {
    pub fn new(from: (f32, f32), to: (f32, f32)) -> Self {
        Self { from, to }
    }
}

/// Build the segments drawn for a gesture.
///
/// Consecutive `centers` are joined in order. If a `pointer` is given and at
/// least one center exists, a trailing "rubber band" segment runs from the
/// last center to the pointer.
pub fn pattern_segments<I>(centers: I, pointer: Option<(f32, f32)>) -> Vec<Segment>
where
    I: IntoIterator<Item = (f32, f32)>,
{
    let mut segments = Vec::new();
    let mut last = None;
    for center in centers {
        if let Some(prev) = last {
            segments.push(Segment::new(prev, center));
        }
        last = Some(center);
    }
    if let (Some(last), Some(pointer)) = (last, pointer) {
        segments.push(Segment::new(last, pointer));
    }
    segments
}

/// Generate SVG path commands for a set of line segments
///
/// # Returns
/// SVG path command string (e.g., "M 50 50 L 150 150 M 150 150 L 250 250"),
/// empty if there are no segments
pub fn generate_pattern_path(segments: &[Segment]) -> String {
    let mut commands = String::with_capacity(segments.len() * 24);
    for segment in segments {
        if !commands.is_empty() {
            commands.push(' ');
        }
        commands.push_str(&format!(
            "M {} {} L {} {}",
            segment.from.0, segment.from.1, segment.to.0, segment.to.1
        ));
    }
    commands
}
