//! Position-history recording (the rendered "trail" of the lecture
//! scripts, kept here as plain data for any host to draw).

use emdrift_math::Vec3;
use serde::Serialize;

/// Records the particle path as (time, position) samples.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrailRecorder {
    /// Timestamps for each sample.
    pub times: Vec<f64>,
    /// Recorded positions, one [x, y, z] triple per sample.
    pub positions: Vec<[f64; 3]>,
}

impl TrailRecorder {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample.
    pub fn record(&mut self, time: f64, position: &Vec3) {
        self.times.push(time);
        self.positions.push([position.x, position.y, position.z]);
    }

    /// Number of samples recorded.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Clear all recorded samples.
    pub fn clear(&mut self) {
        self.times.clear();
        self.positions.clear();
    }

    /// Export to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_clear() {
        let mut trail = TrailRecorder::new();
        assert!(trail.is_empty());

        for i in 0..5 {
            let t = i as f64 * 0.1;
            trail.record(t, &Vec3::new(t, 2.0 * t, 0.0));
        }
        assert_eq!(trail.len(), 5);
        assert_eq!(trail.positions[2], [0.2, 0.4, 0.0]);

        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail.positions.len(), 0);
    }

    #[test]
    fn test_to_json() {
        let mut trail = TrailRecorder::new();
        trail.record(0.0, &Vec3::zeros());
        trail.record(0.1, &Vec3::new(1.0, 0.0, 0.0));

        let json = trail.to_json().unwrap();
        assert!(json.contains("\"times\""));
        assert!(json.contains("\"positions\""));
    }
}
