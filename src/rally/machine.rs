//! Token-by-token interpreter for one rally line.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::{
    AttackEvent, Complex, Event, Mode, PointEvent, RallyWarning, ReceptionEvent, ServeEvent,
    SetEvent, TeamMode, WarningKind,
};
use crate::lineup::{Lineup, PlayerId};
use crate::notation::codes::{
    ActionKind, AttackOutcome, Code, HitZone, ReceivingPosition, ReceptionOutcome, ReceptionType,
    ReturnKind, ServeOutcome, ServeType, ServeZone, SetDestination, SetType,
};
use crate::notation::{
    split_rally, tokenize, DecodeError, DecodeErrorKind, RallyLine, RawToken, Syntax, Token,
};

/// Read-only inputs shared by every rally of a transcript.
#[derive(Debug, Clone, Copy)]
pub struct RallyContext<'a> {
    pub syntax: Syntax,
    pub serve_types: &'a BTreeMap<PlayerId, ServeType>,
    pub default_serve_type: ServeType,
}

/// Everything one rally line produced.
///
/// Events decoded before a failure are kept so the caller can decide whether
/// to commit or drop them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RallyOutcome {
    pub rally: usize,
    pub events: Vec<Event>,
    pub warnings: Vec<RallyWarning>,
    /// Final mode on success.
    pub result: Result<Mode, DecodeError>,
}

impl RallyOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Decode one rally line from its header to the last token.
pub fn decode_rally(line: &RallyLine, ctx: &RallyContext<'_>) -> RallyOutcome {
    let failed = |error: DecodeError| RallyOutcome {
        rally: line.index,
        events: Vec::new(),
        warnings: Vec::new(),
        result: Err(error),
    };

    let Some((header, actions)) = split_rally(&line.text, ctx.syntax.separator) else {
        return failed(DecodeError::header(
            line.index,
            &line.text,
            DecodeErrorKind::MissingSeparator(ctx.syntax.separator),
        ));
    };

    let lineup = match Lineup::from_header(header) {
        Ok(lineup) => lineup,
        Err(e) => return failed(DecodeError::header(line.index, header, e)),
    };

    debug!(rally = line.index, line = line.line_number, %lineup, "decoding rally");

    let mut machine = RallyMachine::new(line.index, lineup, ctx);
    for raw in tokenize(actions) {
        if let Err(e) = machine.step(raw) {
            debug!(rally = line.index, error = %e, "rally failed");
            return machine.finish(Err(e));
        }
    }
    let mode = machine.mode();
    machine.finish(Ok(mode))
}

/// Internal state. Carries the values gathered so far in the current
/// sequence, so later transitions never look at half-filled scratch fields.
#[derive(Debug, Clone, Copy)]
enum State {
    AwaitingAction,
    ServeZone {
        server: PlayerId,
    },
    ServeOutcome {
        server: PlayerId,
        zone: ServeZone,
    },
    ReceptionType,
    ReceivingPosition {
        reception_type: ReceptionType,
    },
    ReceptionOutcome {
        reception_type: ReceptionType,
        position: ReceivingPosition,
        player: PlayerId,
    },
    PossibleReturn,
    SetDestination,
    SetType {
        destination: SetDestination,
        hitter: PlayerId,
    },
    ZoneOfHit {
        destination: SetDestination,
        hitter: PlayerId,
        set_type: SetType,
    },
    OutcomeOfHit {
        destination: SetDestination,
        hitter: PlayerId,
        set_type: SetType,
        zone: HitZone,
    },
    Terminal(Mode),
}

impl State {
    fn mode(&self) -> Mode {
        match self {
            State::AwaitingAction => Mode::AwaitingAction,
            State::ServeZone { .. } => Mode::AwaitingServeZone,
            State::ServeOutcome { .. } => Mode::AwaitingServeOutcome,
            State::ReceptionType => Mode::AwaitingReceptionType,
            State::ReceivingPosition { .. } => Mode::AwaitingReceivingPosition,
            State::ReceptionOutcome { .. } => Mode::AwaitingReceptionOutcome,
            State::PossibleReturn => Mode::AwaitingPossibleReturn,
            State::SetDestination => Mode::AwaitingSetDestination,
            State::SetType { .. } => Mode::AwaitingSetType,
            State::ZoneOfHit { .. } => Mode::AwaitingZoneOfHit,
            State::OutcomeOfHit { .. } => Mode::AwaitingOutcomeOfHit,
            State::Terminal(mode) => *mode,
        }
    }
}

/// A point on our serve that has not been decided yet.
#[derive(Debug, Clone, Copy)]
struct ServingPoint {
    rotation: usize,
    server: PlayerId,
}

/// State machine for one rally line.
pub struct RallyMachine<'a> {
    ctx: &'a RallyContext<'a>,
    rally: usize,
    lineup: Lineup,
    state: State,
    team: TeamMode,
    complex: Complex,
    /// Position of the reception the current K1 attack is built from.
    reception_position: Option<ReceivingPosition>,
    open_point: Option<ServingPoint>,
    token: usize,
    events: Vec<Event>,
    warnings: Vec<RallyWarning>,
}

impl<'a> RallyMachine<'a> {
    pub fn new(rally: usize, lineup: Lineup, ctx: &'a RallyContext<'a>) -> Self {
        Self {
            ctx,
            rally,
            lineup,
            state: State::AwaitingAction,
            team: TeamMode::Unknown,
            complex: Complex::FromReception,
            reception_position: None,
            open_point: None,
            token: 0,
            events: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn team(&self) -> TeamMode {
        self.team
    }

    pub fn lineup(&self) -> &Lineup {
        &self.lineup
    }

    /// Consume one raw token.
    pub fn step(&mut self, raw: RawToken<'_>) -> Result<(), DecodeError> {
        let mode = self.mode();
        let rally = self.rally;
        self.token = raw.index;
        let error =
            |kind: DecodeErrorKind| DecodeError::token(rally, raw.index, raw.text, mode, kind);

        let token = raw.classify(&self.ctx.syntax).map_err(error)?;
        trace!(rally = self.rally, token = raw.index, %mode, text = raw.text, "step");

        match token {
            Token::Substitution(sub) => self
                .lineup
                .apply_substitution(&sub)
                .map_err(|e| error(e.into())),
            Token::Empty => {
                self.state = State::AwaitingAction;
                Ok(())
            }
            Token::Run { marker, len } => self.run(marker, len).map_err(error),
        }
    }

    /// Stop decoding and hand out what was gathered.
    pub fn finish(self, result: Result<Mode, DecodeError>) -> RallyOutcome {
        RallyOutcome {
            rally: self.rally,
            events: self.events,
            warnings: self.warnings,
            result,
        }
    }

    fn run(&mut self, marker: char, len: usize) -> Result<(), DecodeErrorKind> {
        let action = self.ctx.syntax.action_marker;

        let state = self.state;
        self.state = match state {
            State::AwaitingAction => match decode::<ActionKind>(marker, len, action)? {
                ActionKind::Serve => self.start_serve(),
                ActionKind::Reception => self.start_reception(),
            },

            State::ServeZone { server } => State::ServeOutcome {
                server,
                zone: decode(marker, len, action)?,
            },

            State::ServeOutcome { server, zone } => {
                let outcome = decode::<ServeOutcome>(marker, len, action)?;
                let serve_type = self.serve_type(server);
                self.emit(Event::Serve(ServeEvent {
                    server,
                    serve_type,
                    zone,
                    outcome,
                }));
                match outcome {
                    ServeOutcome::Ace => {
                        self.close_point(true);
                        State::Terminal(Mode::Ace)
                    }
                    ServeOutcome::Overpass => State::SetDestination,
                    ServeOutcome::Received => State::PossibleReturn,
                    ServeOutcome::Error => {
                        self.close_point(false);
                        State::Terminal(Mode::ServeError)
                    }
                }
            }

            State::ReceptionType => State::ReceivingPosition {
                reception_type: decode(marker, len, action)?,
            },

            State::ReceivingPosition { reception_type } => {
                let position = decode::<ReceivingPosition>(marker, len, action)?;
                State::ReceptionOutcome {
                    reception_type,
                    position,
                    player: self.lineup.receiver_for_position(position),
                }
            }

            State::ReceptionOutcome {
                reception_type,
                position,
                player,
            } => {
                let outcome = decode::<ReceptionOutcome>(marker, len, action)?;
                self.emit(Event::Reception(ReceptionEvent {
                    player,
                    reception_type,
                    position,
                    outcome,
                }));
                if outcome == ReceptionOutcome::Error {
                    self.switch_to_defense();
                } else {
                    self.reception_position = Some(position);
                }
                State::SetDestination
            }

            State::PossibleReturn => {
                let kind = decode::<ReturnKind>(marker, len, self.ctx.syntax.return_marker)?;
                trace!(rally = self.rally, ?kind, "ball returned");
                self.switch_to_defense();
                State::SetDestination
            }

            State::SetDestination => {
                let destination = decode::<SetDestination>(marker, len, action)?;
                let lookup = self.lineup.hitter_for_destination(destination);
                if let Some(warning) = lookup.warning {
                    self.warn(WarningKind::RowFallback(warning));
                }
                State::SetType {
                    destination,
                    hitter: lookup.player,
                }
            }

            State::SetType {
                destination,
                hitter,
            } => {
                let set_type = decode::<SetType>(marker, len, action)?;
                self.emit(Event::Set(SetEvent {
                    setter: self.lineup.setter(),
                    rotation: self.lineup.rotation(),
                    destination,
                    set_type,
                    complex: self.complex,
                    reception_position: self.reception_position,
                }));
                State::ZoneOfHit {
                    destination,
                    hitter,
                    set_type,
                }
            }

            State::ZoneOfHit {
                destination,
                hitter,
                set_type,
            } => State::OutcomeOfHit {
                destination,
                hitter,
                set_type,
                zone: decode(marker, len, action)?,
            },

            State::OutcomeOfHit {
                destination,
                hitter,
                set_type,
                zone,
            } => {
                let outcome = decode::<AttackOutcome>(marker, len, action)?;
                self.emit(Event::Attack(AttackEvent {
                    hitter,
                    destination,
                    set_type,
                    zone,
                    outcome,
                    complex: self.complex,
                }));
                match outcome.wins_point() {
                    Some(true) => {
                        self.close_point(true);
                        State::Terminal(Mode::AttackPoint)
                    }
                    Some(false) => {
                        self.close_point(false);
                        State::Terminal(Mode::AttackLost)
                    }
                    None => {
                        self.switch_to_defense();
                        State::PossibleReturn
                    }
                }
            }

            State::Terminal(_) => return Err(DecodeErrorKind::AfterTerminal),
        };

        Ok(())
    }

    fn start_serve(&mut self) -> State {
        // Serving again means the previous point on our serve was won.
        self.close_point(true);
        if self.team == TeamMode::Receiving {
            self.lineup.rotate();
            debug!(rally = self.rally, rotation = self.lineup.rotation(), "side-out");
        }
        self.team = TeamMode::Serving;
        self.complex = Complex::FromDefense;
        self.reception_position = None;

        let server = self.lineup.server();
        self.open_point = Some(ServingPoint {
            rotation: self.lineup.rotation(),
            server,
        });
        State::ServeZone { server }
    }

    fn start_reception(&mut self) -> State {
        self.close_point(false);
        self.team = TeamMode::Receiving;
        self.complex = Complex::FromReception;
        self.reception_position = None;
        State::ReceptionType
    }

    fn switch_to_defense(&mut self) {
        self.complex = Complex::FromDefense;
        self.reception_position = None;
    }

    fn close_point(&mut self, won: bool) {
        if let Some(point) = self.open_point.take() {
            self.emit(Event::PointClosed(PointEvent {
                won,
                rotation: point.rotation,
                server: point.server,
            }));
        }
    }

    fn serve_type(&mut self, server: PlayerId) -> ServeType {
        match self.ctx.serve_types.get(&server) {
            Some(serve_type) => *serve_type,
            None => {
                let assumed = self.ctx.default_serve_type;
                self.warn(WarningKind::UnknownServeType {
                    player: server,
                    assumed,
                });
                assumed
            }
        }
    }

    fn emit(&mut self, event: Event) {
        trace!(rally = self.rally, ?event, "event");
        self.events.push(event);
    }

    fn warn(&mut self, kind: WarningKind) {
        self.warnings.push(RallyWarning {
            rally: self.rally,
            token: self.token,
            kind,
        });
    }
}

/// Decode a run with the expected marker through the length table of `C`.
fn decode<C: Code>(marker: char, len: usize, expected: char) -> Result<C, DecodeErrorKind> {
    if marker != expected {
        return Err(DecodeErrorKind::WrongMarker {
            expected,
            found: marker,
        });
    }
    C::from_len(len).ok_or(DecodeErrorKind::OutOfRange {
        value: len,
        expected: C::EXPECTED,
    })
}
