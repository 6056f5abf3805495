//! Seed context construction and memory serialization.

use crate::instructions::{AGENT_INSTRUCTION, MEMORY_PREAMBLE, SESSION_INSTRUCTION};
use aria_memory::MemoryRecord;
use aria_protocol::ChatMessage;

/// The initial conversation context handed to the agent runtime.
///
/// Holds the assistant instructions for the runtime's prompt channel,
/// the ordered messages seeded before the session starts, plus the
/// exact serialized memory string that was injected (if any) so the
/// shutdown filter can recognize and exclude it later.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedContext {
    agent_instruction: String,
    session_instruction: String,
    messages: Vec<ChatMessage>,
    memory_seed: Option<String>,
}

impl Default for SeedContext {
    fn default() -> Self {
        Self {
            agent_instruction: AGENT_INSTRUCTION.to_string(),
            session_instruction: SESSION_INSTRUCTION.to_string(),
            messages: Vec::new(),
            memory_seed: None,
        }
    }
}

impl SeedContext {
    /// Create a seed context with the default assistant instructions
    /// and no messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the context.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Inject the serialized record set as one synthetic assistant
    /// message and remember the seed string.
    ///
    /// Callers only invoke this for non-empty record sets; an empty
    /// set seeds nothing.
    pub fn seed_memories(&mut self, records: &[MemoryRecord]) {
        let seed = serialize_records(records);
        self.messages
            .push(ChatMessage::assistant(format!("{MEMORY_PREAMBLE}{seed}")));
        self.memory_seed = Some(seed);
    }

    /// Persona instruction for the runtime's prompt channel.
    pub fn agent_instruction(&self) -> &str {
        &self.agent_instruction
    }

    /// Session-opening instruction for the runtime's prompt channel.
    pub fn session_instruction(&self) -> &str {
        &self.session_instruction
    }

    /// Ordered messages in the context.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The injected memory seed string, when one was seeded.
    pub fn memory_seed(&self) -> Option<&str> {
        self.memory_seed.as_deref()
    }
}

/// Serialize records to the JSON array injected into the seed.
///
/// Order is exactly the order the gateway returned; no re-sorting.
pub fn serialize_records(records: &[MemoryRecord]) -> String {
    serde_json::to_string(records).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{SeedContext, serialize_records};
    use aria_memory::MemoryRecord;
    use aria_protocol::{ChatMessage, Role};
    use pretty_assertions::assert_eq;

    #[test]
    fn serialization_keeps_gateway_order() {
        let records = vec![
            MemoryRecord::new("likes Linkin Park"),
            MemoryRecord::new("prefers tea"),
        ];
        let seed = serialize_records(&records);
        let first = seed.find("likes Linkin Park").expect("first record");
        let second = seed.find("prefers tea").expect("second record");
        assert!(first < second);
    }

    #[test]
    fn seeding_injects_one_assistant_message() {
        let mut seed = SeedContext::new();
        seed.push(ChatMessage::user("hi"));
        seed.seed_memories(&[MemoryRecord::new("likes Linkin Park")]);

        assert_eq!(seed.messages().len(), 2);
        let synthetic = &seed.messages()[1];
        assert_eq!(synthetic.role, Role::Assistant);
        assert!(synthetic.content.contains("likes Linkin Park"));
        let recorded = seed.memory_seed().expect("seed string");
        assert!(synthetic.content.contains(recorded));
    }

    #[test]
    fn empty_context_has_no_seed() {
        let seed = SeedContext::new();
        assert!(seed.messages().is_empty());
        assert_eq!(seed.memory_seed(), None);
    }

    #[test]
    fn new_context_carries_the_assistant_instructions() {
        let seed = SeedContext::new();
        assert_eq!(seed.agent_instruction(), crate::instructions::AGENT_INSTRUCTION);
        assert_eq!(
            seed.session_instruction(),
            crate::instructions::SESSION_INSTRUCTION
        );
    }
}
