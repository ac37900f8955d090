use glam::Vec2;

/// Flüchtiger Zustand einer laufenden Pointer-Interaktion.
///
/// Wird bei jedem Release zurückgesetzt. Die Zähler (`press_generation`,
/// `hover_token`) laufen über die gesamte Lebensdauer monoton weiter und
/// erkennen veraltete Hit-Test-Ergebnisse.
#[derive(Debug, Clone, Default)]
pub struct PendingInteraction {
    /// Primärtaste ist gedrückt
    pub pressed: bool,
    /// Seit dem Press wurde die Drag-Schwelle überschritten
    pub dragging: bool,
    /// Press-Position in Screen-Pixeln
    pub press_origin: Vec2,
    /// Letzte bekannte Pointer-Position während des Press
    pub current: Vec2,
    /// Wird bei jedem Press erhöht
    pub press_generation: u64,
    /// Wird bei jeder Hover-Anfrage erhöht
    pub hover_token: u64,
}

/// Abgeschlossene Interaktion zum Zeitpunkt des Release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleasedInteraction {
    /// Es wurde gezogen (Box-Selektion statt Klick)
    pub dragged: bool,
    /// Press-Position in Screen-Pixeln
    pub press_origin: Vec2,
    /// Generation des zugehörigen Press
    pub press_generation: u64,
}

impl PendingInteraction {
    /// Startet einen Press und gibt dessen Generation zurück.
    pub fn begin_press(&mut self, origin: Vec2) -> u64 {
        self.press_generation += 1;
        // Laufende Hover-Anfragen veralten mit dem Press
        self.hover_token += 1;
        self.pressed = true;
        self.dragging = false;
        self.press_origin = origin;
        self.current = origin;
        self.press_generation
    }

    /// Verarbeitet eine Bewegung während des Press.
    ///
    /// Gibt `true` zurück, sobald (oder solange) gezogen wird.
    pub fn track_move(&mut self, position: Vec2, drag_threshold_px: f32) -> bool {
        if !self.pressed {
            return false;
        }
        self.current = position;
        if !self.dragging && position.distance(self.press_origin) > drag_threshold_px {
            self.dragging = true;
        }
        self.dragging
    }

    /// Beendet den Press. `None`, wenn nichts gedrückt war.
    pub fn release(&mut self) -> Option<ReleasedInteraction> {
        if !self.pressed {
            return None;
        }
        let released = ReleasedInteraction {
            dragged: self.dragging,
            press_origin: self.press_origin,
            press_generation: self.press_generation,
        };
        self.pressed = false;
        self.dragging = false;
        self.press_origin = Vec2::ZERO;
        self.current = Vec2::ZERO;
        Some(released)
    }

    /// Reserviert ein neues Hover-Token; ältere Anfragen werden damit veraltet.
    pub fn next_hover_token(&mut self) -> u64 {
        self.hover_token += 1;
        self.hover_token
    }
}
