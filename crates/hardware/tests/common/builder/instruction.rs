use apex_core::common::Word;
use apex_core::isa::{Instruction, Opcode};

pub struct InstructionBuilder {
    opcode: Opcode,
    rd: usize,
    rs1: usize,
    rs2: usize,
    imm: Word,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: Opcode::Nop,
            rd: 0,
            rs1: 0,
            rs2: 0,
            imm: 0,
        }
    }

    pub fn opcode(mut self, op: Opcode) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: usize) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: usize) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: usize) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn imm(mut self, imm: Word) -> Self {
        self.imm = imm;
        self
    }

    pub fn build(self) -> Instruction {
        Instruction::new(self.opcode, self.rd, self.rs1, self.rs2, self.imm)
    }

    // --- Register-register ALU ---

    pub fn rrr(self, op: Opcode, rd: usize, rs1: usize, rs2: usize) -> Self {
        self.opcode(op).rd(rd).rs1(rs1).rs2(rs2)
    }

    pub fn add(self, rd: usize, rs1: usize, rs2: usize) -> Self {
        self.rrr(Opcode::Add, rd, rs1, rs2)
    }

    pub fn sub(self, rd: usize, rs1: usize, rs2: usize) -> Self {
        self.rrr(Opcode::Sub, rd, rs1, rs2)
    }

    pub fn mul(self, rd: usize, rs1: usize, rs2: usize) -> Self {
        self.rrr(Opcode::Mul, rd, rs1, rs2)
    }

    // --- Register-immediate ---

    pub fn addl(self, rd: usize, rs1: usize, imm: Word) -> Self {
        self.opcode(Opcode::Addl).rd(rd).rs1(rs1).imm(imm)
    }

    pub fn subl(self, rd: usize, rs1: usize, imm: Word) -> Self {
        self.opcode(Opcode::Subl).rd(rd).rs1(rs1).imm(imm)
    }

    pub fn movc(self, rd: usize, imm: Word) -> Self {
        self.opcode(Opcode::Movc).rd(rd).imm(imm)
    }

    // --- Memory ---

    pub fn load(self, rd: usize, rs1: usize, imm: Word) -> Self {
        self.opcode(Opcode::Load).rd(rd).rs1(rs1).imm(imm)
    }

    pub fn loadp(self, rd: usize, rs1: usize, imm: Word) -> Self {
        self.opcode(Opcode::Loadp).rd(rd).rs1(rs1).imm(imm)
    }

    pub fn store(self, rs1: usize, rs2: usize, imm: Word) -> Self {
        self.opcode(Opcode::Store).rs1(rs1).rs2(rs2).imm(imm)
    }

    pub fn storep(self, rs1: usize, rs2: usize, imm: Word) -> Self {
        self.opcode(Opcode::Storep).rs1(rs1).rs2(rs2).imm(imm)
    }

    // --- Compare / control ---

    pub fn cmp(self, rs1: usize, rs2: usize) -> Self {
        self.opcode(Opcode::Cmp).rs1(rs1).rs2(rs2)
    }

    pub fn cml(self, rs1: usize, imm: Word) -> Self {
        self.opcode(Opcode::Cml).rs1(rs1).imm(imm)
    }

    pub fn branch(self, op: Opcode, imm: Word) -> Self {
        self.opcode(op).imm(imm)
    }

    pub fn jump(self, rs1: usize, imm: Word) -> Self {
        self.opcode(Opcode::Jump).rs1(rs1).imm(imm)
    }

    pub fn jalr(self, rd: usize, rs1: usize, imm: Word) -> Self {
        self.opcode(Opcode::Jalr).rd(rd).rs1(rs1).imm(imm)
    }

    pub fn halt(self) -> Self {
        self.opcode(Opcode::Halt)
    }

    pub fn nop(self) -> Self {
        self.opcode(Opcode::Nop)
    }
}

// Shorthands for the common case of building a single instruction inline.

pub fn movc(rd: usize, imm: Word) -> Instruction {
    InstructionBuilder::new().movc(rd, imm).build()
}

pub fn add(rd: usize, rs1: usize, rs2: usize) -> Instruction {
    InstructionBuilder::new().add(rd, rs1, rs2).build()
}

pub fn sub(rd: usize, rs1: usize, rs2: usize) -> Instruction {
    InstructionBuilder::new().sub(rd, rs1, rs2).build()
}

pub fn mul(rd: usize, rs1: usize, rs2: usize) -> Instruction {
    InstructionBuilder::new().mul(rd, rs1, rs2).build()
}

pub fn addl(rd: usize, rs1: usize, imm: Word) -> Instruction {
    InstructionBuilder::new().addl(rd, rs1, imm).build()
}

pub fn subl(rd: usize, rs1: usize, imm: Word) -> Instruction {
    InstructionBuilder::new().subl(rd, rs1, imm).build()
}

pub fn load(rd: usize, rs1: usize, imm: Word) -> Instruction {
    InstructionBuilder::new().load(rd, rs1, imm).build()
}

pub fn loadp(rd: usize, rs1: usize, imm: Word) -> Instruction {
    InstructionBuilder::new().loadp(rd, rs1, imm).build()
}

pub fn store(rs1: usize, rs2: usize, imm: Word) -> Instruction {
    InstructionBuilder::new().store(rs1, rs2, imm).build()
}

pub fn storep(rs1: usize, rs2: usize, imm: Word) -> Instruction {
    InstructionBuilder::new().storep(rs1, rs2, imm).build()
}

pub fn cmp(rs1: usize, rs2: usize) -> Instruction {
    InstructionBuilder::new().cmp(rs1, rs2).build()
}

pub fn cml(rs1: usize, imm: Word) -> Instruction {
    InstructionBuilder::new().cml(rs1, imm).build()
}

pub fn branch(op: Opcode, imm: Word) -> Instruction {
    InstructionBuilder::new().branch(op, imm).build()
}

pub fn jump(rs1: usize, imm: Word) -> Instruction {
    InstructionBuilder::new().jump(rs1, imm).build()
}

pub fn jalr(rd: usize, rs1: usize, imm: Word) -> Instruction {
    InstructionBuilder::new().jalr(rd, rs1, imm).build()
}

pub fn halt() -> Instruction {
    InstructionBuilder::new().halt().build()
}

pub fn nop() -> Instruction {
    InstructionBuilder::new().nop().build()
}
