//! Compiled-in role tables.
//!
//! Section order is display order. Criterion ids are unique within a role.

use super::{CriterionDefinition, RoleDefinition, RoleLevel, SectionDefinition};

type Criteria = &'static [(&'static str, &'static str)];
type Sections = &'static [(&'static str, Criteria)];

const STRATEGY: &str = "Strategic Thinking & Domain Expertise";
const CRAFT: &str = "Craft & Quality";
const LEADERSHIP: &str = "Leadership, Communication, & Collaboration";
const CULTURE: &str = "Team Culture";
const GROWTH: &str = "Independence & Growth Mindset";

/// The six built-in role tables, in ladder order.
const BUILTIN: [(RoleLevel, &str, Sections); 6] = [
    (
        RoleLevel::ProductDesigner,
        "Basic competency assessment for Product Designer role",
        PRODUCT_DESIGNER,
    ),
    (
        RoleLevel::ProductDesignerII,
        "Advanced competency assessment for Product Designer II role",
        PRODUCT_DESIGNER_II,
    ),
    (
        RoleLevel::SeniorProductDesigner,
        "Leadership and technical assessment for Senior Product Designer",
        SENIOR_PRODUCT_DESIGNER,
    ),
    (
        RoleLevel::SeniorProductDesignerII,
        "Advanced leadership assessment for Senior Product Designer II",
        SENIOR_PRODUCT_DESIGNER_II,
    ),
    (
        RoleLevel::PrincipalProductDesigner,
        "Strategic assessment for Principal Product Designer",
        PRINCIPAL_PRODUCT_DESIGNER,
    ),
    (
        RoleLevel::PrincipalProductDesignerII,
        "Advanced strategic assessment for Principal Product Designer II",
        PRINCIPAL_PRODUCT_DESIGNER_II,
    ),
];

/// Expand the static tables into owned definitions.
pub(super) fn builtin_roles() -> Vec<RoleDefinition> {
    BUILTIN
        .iter()
        .map(|(level, description, sections)| {
            let sections = sections
                .iter()
                .map(|(title, criteria)| {
                    let criteria = criteria
                        .iter()
                        .map(|(id, text)| CriterionDefinition::new(*id, *text))
                        .collect();
                    SectionDefinition::new(*title, criteria)
                })
                .collect();
            RoleDefinition::new(*level, *description, sections)
        })
        .collect()
}

// =============================================================================
// PRODUCT DESIGNER
// =============================================================================

const PRODUCT_DESIGNER: Sections = &[
    (
        STRATEGY,
        &[
            (
                "problem_identification",
                "Proactively identifies gaps or improvement areas in the problem definitions they are working in occasionally",
            ),
            (
                "customer_understanding",
                "Understands the voice of the customer, and leverages research to make well-informed product decisions. Justifies ideas based on real evidence vs just intuition",
            ),
            (
                "industry_trends",
                "Starting to understand and recognize industry patterns and trends",
            ),
            (
                "competitor_awareness",
                "Awareness of what's happening with our competitors and within our industry for their use case area",
            ),
        ],
    ),
    (
        CRAFT,
        &[
            (
                "design_system",
                "Takes the time to understand our design system and lean on existing patterns",
            ),
            (
                "design_principles",
                "Understands and adheres to our org's design principles with a decreasing need for guidance",
            ),
        ],
    ),
    (
        LEADERSHIP,
        &[
            (
                "cross_functional",
                "Can facilitate cross-functional conversations between design, product, ops, and business",
            ),
            (
                "research_challenges",
                "Identifies challenges that arise during the course of research can effectively articulate the problem to stakeholders",
            ),
            (
                "values_application",
                "Learns our values and starts consciously applying these",
            ),
        ],
    ),
    (
        CULTURE,
        &[
            (
                "participation",
                "Regularly participates in research, design, and product team meetings, critiques, and events",
            ),
            (
                "feedback",
                "Seeks to provide actionable feedback to others projects when possible",
            ),
            ("hiring", "Participates in hiring processes as needed"),
        ],
    ),
    (
        GROWTH,
        &[
            ("guidance", "Needs guidance in some areas"),
            ("improvement", "Consistently seek out opportunities to improve"),
            ("resilience", "Be resilient when you face setbacks"),
        ],
    ),
];

// =============================================================================
// PRODUCT DESIGNER II
// =============================================================================

const PRODUCT_DESIGNER_II: Sections = &[
    (
        STRATEGY,
        &[
            (
                "escrow_understanding",
                "Understands key deals of title and escrow and the industry, title and escrow functions on teams with the ability to recommend specific areas of improvement",
            ),
            (
                "problem_definition",
                "Partners effectively with product, ops, and others to define the problems to understand and to validate critical decision-making",
            ),
            (
                "team_understanding",
                "Challenges and influences their team's understanding of the problem",
            ),
            (
                "focus_priorities",
                "Knows when to focus on the big picture vs zoom into the details",
            ),
            (
                "competitor_analysis",
                "Aware of what's happening with competitors and within our industry for their use case area. Is able to analyze the problems competitors are solving and use this to inform strategy",
            ),
            (
                "role_understanding",
                "Has a base level understanding of title and escrow, as well as functions and responsibilities of roles on the teams",
            ),
        ],
    ),
    (
        CRAFT,
        &[
            (
                "design_quality",
                "Work is crisp and thorough - very few pixel artifacts, misalignments, or issues with gestalt principles",
            ),
            (
                "pattern_awareness",
                "Has a keen awareness of existing patterns bias toward leveraging familiarity over novelty",
            ),
            (
                "design_principles",
                "Work is a great example of adhering to established design principles, and others are starting to leverage your work",
            ),
            (
                "domain_expertise",
                "Deepening product and domain expertise, regularly participating in research",
            ),
            (
                "tooling_understanding",
                "Deeply understand the current tooling industry and landscape, rarely missing a beat on how your projects would fit into existing customer workflows and motivations",
            ),
        ],
    ),
    (
        LEADERSHIP,
        &[
            (
                "conflict_resolution",
                "Can reconcile disagreements between team members to broker a resolution",
            ),
            (
                "gaps_identification",
                "Fills gaps as necessary to ensure success of the work and team",
            ),
            (
                "stakeholder_management",
                "Effectively escalates to project lead and/or stakeholder as necessary. Can effectively stakeholder potential solutions",
            ),
        ],
    ),
    (
        CULTURE,
        &[
            (
                "participation",
                "Regularly participates in research, design, and product team meetings, critiques, and events",
            ),
            (
                "feedback",
                "Seeks to provide actionable feedback to others projects when possible",
            ),
            ("hiring", "Participates in hiring processes as needed"),
        ],
    ),
    (
        GROWTH,
        &[
            ("guidance_needs", "Needs guidance in some areas"),
            ("improvement", "Consistently seek out opportunities to improve"),
            ("resilience", "Be resilient when you face setbacks"),
        ],
    ),
];

// =============================================================================
// SENIOR PRODUCT DESIGNER
// =============================================================================

const SENIOR_PRODUCT_DESIGNER: Sections = &[
    (
        STRATEGY,
        &[
            (
                "domain_understanding",
                "Has a deep understanding of title and escrow and real estate team roles, and is able to leverage individual team improvements to align to overall OKRs and mission.",
            ),
            (
                "competitive_landscape",
                "Understands the competitive landscape and industry trends for their use case area that might inform product strategy and identify sustainable advantages.",
            ),
            (
                "product_challenges",
                "Can handle complex product challenges, often involving a strong understanding of technical, development, or business aspects",
            ),
            (
                "requirements_handling",
                "Deeply understands project requirements, frequently being able to gain of understanding or accurately listing trade-offs",
            ),
            (
                "guidance_provision",
                "Guidance and mentorship is often effective, and able to help start guidance and help chart directions using a thorough product and customer understanding",
            ),
        ],
    ),
    (
        CRAFT,
        &[
            (
                "design_quality",
                "Designs are consistently a shining example of completeness; people rarely need clarification on design details like hover states, edge cases, and screen sizes",
            ),
            (
                "pattern_understanding",
                "Deeply understands industry patterns, and can identify how and when they are effective. Only creates new ones as needed, validating them with research.",
            ),
        ],
    ),
    (
        LEADERSHIP,
        &[
            (
                "strategic_communication",
                "Starting to develop strategic communication skills vs. tactical communication",
            ),
            (
                "value_communication",
                "Can effectively communicate product value proposition and capabilities",
            ),
            (
                "stakeholder_management",
                "Can think strategically about stakeholder/project management",
            ),
            (
                "business_alignment",
                "Can effectively tie the team's output to the business value it drives for the entire team to understand",
            ),
            (
                "peer_influence",
                "Can influence peers across the company on the value of research/design, user-centered thinking, and great UX",
            ),
            (
                "discipline_improvement",
                "Participates in efforts to improve the entire discipline",
            ),
        ],
    ),
    (
        CULTURE,
        &[
            (
                "process_facilitation",
                "Comfortably runs and facilitates research and design team processes effectively",
            ),
            (
                "feedback_handling",
                "Others actively seek their feedback, and listen to their guidance",
            ),
            (
                "process_improvement",
                "Offers improvements to team processes like critiques and team meetings",
            ),
        ],
    ),
    (
        GROWTH,
        &[
            (
                "independence",
                "Works independently in most areas, may escalate to more senior individuals",
            ),
            (
                "fixed_mindset",
                "Knows and manages their triggers for fixed mindset",
            ),
            (
                "learning_application",
                "Actively seeks out and applies lessons and inspiration from the success of others",
            ),
        ],
    ),
];

// =============================================================================
// SENIOR PRODUCT DESIGNER II
// =============================================================================

const SENIOR_PRODUCT_DESIGNER_II: Sections = &[
    (
        STRATEGY,
        &[
            (
                "product_strategy",
                "Contributes to product strategy discussions and helps shape the product roadmap",
            ),
            (
                "industry_knowledge",
                "Deep understanding of industry trends and their impact on product decisions",
            ),
            (
                "user_advocacy",
                "Strong advocate for user needs while balancing business requirements",
            ),
        ],
    ),
    (
        "Leadership & Team Impact",
        &[
            (
                "mentorship",
                "Actively mentors junior designers and helps them grow in their careers",
            ),
            (
                "project_leadership",
                "Takes ownership of complex projects and guides them to successful completion",
            ),
            (
                "cross_functional",
                "Effectively leads cross-functional initiatives and builds consensus",
            ),
        ],
    ),
    (
        "Design Excellence",
        &[
            (
                "system_thinking",
                "Demonstrates excellent system thinking and creates scalable design solutions",
            ),
            (
                "quality_standards",
                "Sets and maintains high quality standards for the design team",
            ),
            (
                "innovation",
                "Drives innovation while ensuring consistency with design principles",
            ),
        ],
    ),
];

// =============================================================================
// PRINCIPAL PRODUCT DESIGNER
// =============================================================================

const PRINCIPAL_PRODUCT_DESIGNER: Sections = &[
    (
        STRATEGY,
        &[
            (
                "domain_expertise",
                "Has a deep understanding of title and escrow and real estate team roles, and is able to leverage individual team improvements to align to overall OKRs and KPIs.",
            ),
            (
                "competitive_landscape",
                "Understands the competitive landscape and industry trends for their use case area that might fall inform product strategy and identify sustainable advantages.",
            ),
            (
                "complex_challenges",
                "Can handle complex product challenges, often involving a strong understanding of technical, development, or business aspects",
            ),
            (
                "requirements_understanding",
                "Deeply understands explicit requirements, frequently finds gaps of understanding or accurately listing trade-offs",
            ),
            (
                "product_direction",
                "Develops and maintains a firm shared, and able to help start guiding it and narrow in from diverging directions using a thorough product and customer understanding",
            ),
        ],
    ),
    (
        CRAFT,
        &[
            (
                "design_quality",
                "Designs are consistently a shining example of completeness; people rarely need clarification on design details like hover states, edge cases, and screen sizes",
            ),
            (
                "industry_patterns",
                "Deeply understands industry patterns, and can identify how and when they are effective. Only creates new ones as needed, validating them with research.",
            ),
        ],
    ),
    (
        LEADERSHIP,
        &[
            (
                "strategic_communication",
                "Starting to develop strategic communication skills vs. tactical communication.",
            ),
            (
                "value_proposition",
                "Can effectively communicate product value proposition and capabilities.",
            ),
            (
                "stakeholder_management",
                "Can think strategically about stakeholder/project management.",
            ),
            (
                "business_value",
                "Can effectively tie the team's output to the business value it drives for the entire team to understand.",
            ),
            (
                "peer_influence",
                "Can influence peers across the company on the value of research/design, user-centered thinking, and great UX.",
            ),
            (
                "discipline_improvement",
                "Participates in efforts to improve the entire discipline.",
            ),
        ],
    ),
    (
        CULTURE,
        &[
            (
                "facilitation",
                "Comfortably runs and facilitates research and design team processes effectively",
            ),
            (
                "feedback",
                "Others actively seek their feedback, and listen to their guidance",
            ),
            (
                "process_improvement",
                "Offers improvements to team processes like critiques and team meetings",
            ),
        ],
    ),
    (
        GROWTH,
        &[
            (
                "independence",
                "Works independently in most areas, may escalate to more senior individuals",
            ),
            (
                "mindset_management",
                "Knows and manages their triggers for fixed mindset",
            ),
            (
                "learning",
                "Actively seeks out and applies lessons and inspiration from the success of others",
            ),
        ],
    ),
];

// =============================================================================
// PRINCIPAL PRODUCT DESIGNER II
// =============================================================================

const PRINCIPAL_PRODUCT_DESIGNER_II: Sections = &[
    (
        STRATEGY,
        &[
            (
                "vision_setting",
                "Sets a multi-year design vision for their area that product and engineering leadership adopt as a planning input.",
            ),
            (
                "market_positioning",
                "Shapes how the company positions itself against competitors, turning industry trends into durable product bets.",
            ),
            (
                "portfolio_tradeoffs",
                "Frames trade-offs across multiple teams and product lines so leadership can make portfolio-level decisions.",
            ),
            (
                "ambiguity_navigation",
                "Takes on the most ambiguous problems in the organization and converges them into clear, testable directions.",
            ),
        ],
    ),
    (
        CRAFT,
        &[
            (
                "quality_bar",
                "Defines the quality bar for the discipline; their work is the reference others calibrate against.",
            ),
            (
                "system_stewardship",
                "Stewards the evolution of the design system and introduces new patterns only where research shows a clear gap.",
            ),
        ],
    ),
    (
        LEADERSHIP,
        &[
            (
                "executive_communication",
                "Communicates design strategy to executives in terms of business outcomes and risk.",
            ),
            (
                "org_influence",
                "Influences roadmaps and priorities outside their own team through trust rather than authority.",
            ),
            (
                "cross_org_alignment",
                "Aligns design, product, engineering and operations across organizations on shared goals.",
            ),
            (
                "discipline_leadership",
                "Leads efforts that measurably raise the capability of the entire design discipline.",
            ),
        ],
    ),
    (
        CULTURE,
        &[
            (
                "mentorship_at_scale",
                "Mentors senior and principal designers and grows future design leaders.",
            ),
            (
                "culture_building",
                "Models and reinforces the team's values in critiques, hiring and everyday collaboration.",
            ),
            (
                "process_design",
                "Designs and evolves team rituals and processes so they scale with the organization.",
            ),
        ],
    ),
    (
        GROWTH,
        &[
            (
                "full_autonomy",
                "Operates with full autonomy and knows when to pull in leadership.",
            ),
            (
                "self_reflection",
                "Regularly reflects on their own blind spots and actively seeks critical feedback.",
            ),
            (
                "industry_contribution",
                "Contributes learning back to the wider design community.",
            ),
        ],
    ),
];
