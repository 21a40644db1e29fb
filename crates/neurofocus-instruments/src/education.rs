//! Built-in reading modules.

use std::sync::LazyLock;

use neurofocus_core::models::education::EducationModule;
use neurofocus_core::models::profile::Accent;

static MODULES: LazyLock<Vec<EducationModule>> = LazyLock::new(|| {
    vec![
        EducationModule {
            id: "assessment_process".to_string(),
            title: "The Assessment Process".to_string(),
            subtitle: "What actually happens in the room?".to_string(),
            icon: "clipboard.fill".to_string(),
            content: r#"
A formal ADHD assessment is rarely just a questionnaire. It is a clinical interview that typically involves:

**1. Developmental History:**
The clinician will ask about your childhood. Evidence of symptoms before age 12 is a key diagnostic criteria.

**2. The Clinical Interview:**
A deep dive into your current life—work, relationships, and daily struggles. They aren't just checking boxes; they are looking for impairment in multiple settings.

**3. Collateral Information:**
They may ask for school reports or to speak with a partner or parent to get an outside perspective.

> **Tip:** Be honest about your *"worst days."* High-functioning adults often downplay their struggles because they have developed coping mechanisms that hide the struggle.
"#
            .to_string(),
            accent: Accent::Blue,
            tag: None,
        },
        EducationModule {
            id: "adhd_in_women".to_string(),
            title: "ADHD in Women".to_string(),
            subtitle: "Why it is commonly missed".to_string(),
            icon: "person.fill.questionmark".to_string(),
            content: r#"
ADHD presentation in women often differs from the hyperactive "naughty boy" stereotype, leading to missed diagnoses.

Common Internalized Symptoms:

- Daydreaming rather than disrupting class.
- Chronic anxiety and perfectionism as coping mechanisms.
- "The Swan Effect": Looking calm on the surface but paddling frantically underneath.
- Emotional dysregulation often misdiagnosed as BPD or Anxiety.
- Social masking (mimicking peers to fit in).

If you feel exhausted from "holding it together," mention this specifically to your clinician.
"#
            .to_string(),
            accent: Accent::Purple,
            tag: Some("Must Read".to_string()),
        },
        EducationModule {
            id: "high_achievers".to_string(),
            title: "High-Achieving Adults".to_string(),
            subtitle: "Success doesn't rule out ADHD".to_string(),
            icon: "star.fill".to_string(),
            content: r#"
You can have a PhD, a high-paying job, and a clean house, and still have ADHD. This is often called "High-Functioning ADHD."

The Cost of Coping:
High achievers often compensate with high intelligence or extreme anxiety (fear of failure). You might get the work done, but it takes you 3x the energy it takes others, leaving you burnt out.

Clinicians look for the "GAP" between your potential and your performance, or the emotional cost required to maintain your standard of living.
"#
            .to_string(),
            accent: Accent::Orange,
            tag: None,
        },
        EducationModule {
            id: "uk_pathways".to_string(),
            title: "UK Pathways: Right to Choose".to_string(),
            subtitle: "Navigating the NHS and Private".to_string(),
            icon: "map.fill".to_string(),
            content: r#"
In the UK, you have specific legal rights regarding your healthcare.

1. Standard NHS Route:
   Visit GP -> Referral to local ADHD service -> Waitlist (often 2-5 years depending on area).

2. Right to Choose (RTC):
   Under NHS England rules, if you are referred by a GP for a specialized service, you have the legal right to choose which provider you see, provided they have an NHS contract.

   How to use RTC:
   • Research providers (e.g., Psychiatry-UK, ADHD 360).
   • Download their specific "RTC letter" template.
   • Take it to your GP and ask specifically for a "Right to Choose referral."
   • This can reduce wait times from years to months.

3. Private Route:
   Fastest (weeks), but expensive. Ensure your GP accepts "Shared Care Agreements" before paying, otherwise, you may have to pay for medication privately forever.
"#
            .to_string(),
            accent: Accent::Indigo,
            tag: Some("UK Specific".to_string()),
        },
    ]
});

/// All reading modules, in display order.
pub fn all_modules() -> &'static [EducationModule] {
    &MODULES
}

/// Look up a reading module by ID.
pub fn get_module(id: &str) -> Option<&'static EducationModule> {
    MODULES.iter().find(|m| m.id == id)
}
