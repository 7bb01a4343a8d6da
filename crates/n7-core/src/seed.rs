//! The built-in catalog written to an empty store on first read.

use crate::catalog::{Catalog, Category, Prompt};

fn category(name: &str, prompts: Vec<Prompt>) -> Category {
  Category {
    name: name.to_owned(),
    prompts,
  }
}

/// The default catalog: five categories, eleven prompts.
pub fn seed() -> Catalog {
  Catalog::from_categories(vec![
    category("Tech Automation", vec![
      Prompt::new(
        "Act as an AWS DevOps engineer. Write a Python 3.11 Lambda that pulls \
         Rules.conf from S3, validates sections, deduplicates domains, and \
         writes the optimized file back to S3 with versioning. Output only \
         the final code.",
      )
      .with_tags(["aws", "lambda", "s3", "shadowrocket"])
      .with_notes("Add IAM least-privilege and CloudWatch metrics."),
      Prompt::new(
        "As a Cloudflare Worker specialist, harden this Worker that serves \
         KV-backed config. Add input validation, ETag support, and consistent \
         cache headers. Output only the final JS.",
      )
      .with_tags(["cloudflare", "workers", "security"]),
      Prompt::new(
        "Create a GitHub Actions workflow that builds and pushes a Docker \
         image to ECR, then updates an ECS service with zero downtime. \
         Include OIDC auth; no long-lived AWS keys.",
      )
      .with_tags(["github-actions", "ecr", "ecs", "oidc"]),
    ]),
    category("iOS / Scriptable", vec![
      Prompt::new(
        "Build a Scriptable widget that fetches https://example.com/status, \
         shows config title, last update time, and connection state. If \
         unreachable, show a subtle warning icon.",
      )
      .with_tags(["ios", "scriptable", "widget"])
      .with_notes("Keep minimal and legible."),
      Prompt::new(
        "Create a Shortcuts-friendly plaintext generator for a supportive text \
         with 1 emoji, avoiding 'morning', and saving to a specified file \
         path.",
      )
      .with_tags(["shortcuts", "textgen"]),
    ]),
    category("Network & Security", vec![
      Prompt::new(
        "Audit this AWS Security Group set for a WireGuard host. Recommend \
         least-privilege inbound rules, logging, and IPv6 considerations, \
         then output a secure baseline template.",
      )
      .with_tags(["wireguard", "security", "aws"]),
      Prompt::new(
        "Generate a Shadowrocket rules.conf that prefers DIRECT for \
         Apple/CDN/auth endpoints, proxies only when needed, and separates \
         Auto vs Manual sections for safe rollback.",
      )
      .with_tags(["shadowrocket", "routing"]),
    ]),
    category("Docs & Compliance", vec![
      Prompt::new(
        "Draft a README using DFSG and CC BY-SA 3.0 disclosure blocks, with \
         standard badges and a security contact section. Keep it \
         vendor-neutral and reproducible.",
      )
      .with_tags(["docs", "dfsg", "cc-by-sa"])
      .with_notes("Uniform disclosure layout across repos."),
      Prompt::new(
        "Summarize LinkedIn post content into actionable bullet points for an \
         IT/NetOps audience. Include one-sentence takeaway and a follow-up \
         experiment to try today.",
      )
      .with_tags(["linkedin", "summary"]),
    ]),
    category("Relationship / EQ", vec![
      Prompt::new(
        "Write a short, hopeful text to my spouse using our private tone, 1 \
         emoji, no 'morning', inviting a tiny plan today (10–15 minutes) \
         without pressure.",
      )
      .with_tags(["support", "micro-plan"]),
      Prompt::new(
        "Rewrite this message so it reads calm and appreciative, keeps my \
         original meaning, and ends with one gentle question that invites a \
         reply.",
      )
      .with_tags(["support", "rewrite"]),
    ]),
  ])
}
